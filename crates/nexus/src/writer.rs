//! Write operations for instrument documents

// standard library
use std::io::Write;
use std::path::Path;

// crate modules
use crate::error::Result;
use crate::node::Document;

// nxgeom modules
use nxgeom_utils::write_atomic;

// external crates
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

/// Whitespace used when writing a document
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Indented by 4 spaces, one value per line
    #[default]
    Pretty,
    /// No whitespace at all
    Compact,
}

/// Serialise a document to any writer
pub fn write_to<W: Write>(document: &Document, layout: Layout, writer: W) -> Result<()> {
    match layout {
        Layout::Pretty => {
            let formatter = PrettyFormatter::with_indent(b"    ");
            let mut serializer = Serializer::with_formatter(writer, formatter);
            document.serialize(&mut serializer)?;
        }
        Layout::Compact => serde_json::to_writer(writer, document)?,
    }
    Ok(())
}

/// Serialise a document to a string
///
/// ```rust
/// # use nxgeom_nexus::{to_string, Document, Layout, Node};
/// let doc = Document {
///     children: vec![Node::group("entry")],
///     ..Default::default()
/// };
///
/// let text = to_string(&doc, Layout::Compact).unwrap();
/// assert_eq!(text, r#"{"children":[{"name":"entry","type":"group","children":[]}]}"#);
/// ```
pub fn to_string(document: &Document, layout: Layout) -> Result<String> {
    let mut buffer = Vec::new();
    write_to(document, layout, &mut buffer)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write a document to a JSON file
///
/// The document is written to a temporary file next to `path` and renamed
/// into place, so a failed write never leaves a partial document behind.
pub fn write_document<P: AsRef<Path>>(document: &Document, path: P, layout: Layout) -> Result<()> {
    let path = path.as_ref();
    write_atomic(path, |writer| {
        write_to(document, layout, &mut *writer).map_err(std::io::Error::other)?;
        writeln!(writer)
    })?;
    info!("Written {:?} document to {}", layout, path.display());
    Ok(())
}
