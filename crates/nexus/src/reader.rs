//! Read operations for instrument documents

// standard library
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// crate modules
use crate::error::Result;
use crate::node::Document;

// external crates
use log::{debug, info};

/// Read an instrument document from a JSON file
///
/// Either layout is accepted, and keys that are not modelled by [Document]
/// are kept so that the document can be written back out unchanged.
///
/// ```rust, no_run
/// # use nxgeom_nexus::read_document;
/// let baseline = read_document("bifrost_baseline.json").unwrap();
/// println!("{} top level nodes", baseline.children.len());
/// ```
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    info!("Reading {}", path.as_ref().display());
    let document: Document = serde_json::from_reader(init_reader(path)?)?;
    debug!("Read {} top level nodes", document.children.len());
    Ok(document)
}

/// Parse an instrument document from a JSON string
pub fn parse_document(text: &str) -> Result<Document> {
    Ok(serde_json::from_str(text)?)
}

fn init_reader(path: impl AsRef<Path>) -> Result<BufReader<File>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file))
}
