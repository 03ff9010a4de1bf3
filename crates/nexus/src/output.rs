//! Creating a new document or splicing into a baseline

// standard library
use std::path::{Path, PathBuf};

// crate modules
use crate::detector::INSTRUMENT_PATH;
use crate::error::{Error, Result};
use crate::node::{Document, Node};
use crate::reader::read_document;
use crate::writer::{write_document, Layout};

// external crates
use log::{debug, info};

/// Where the detector subtree ends up
#[derive(Debug, Clone, PartialEq)]
pub enum OutputMode {
    /// Fresh `entry/instrument` document holding only the detector
    New,
    /// Copy of an existing document with the detector added under
    /// `entry/instrument`
    Splice {
        /// Document to copy, never modified
        baseline: PathBuf,
    },
}

/// Build the output document for a detector subtree and write it to `output`
///
/// In splice mode the baseline is read, the detector appended to the first
/// `entry` node's `instrument` child, and the result written to `output`. The
/// baseline file itself is never written to, and asking to do so is an error.
///
/// ```rust, no_run
/// # use nxgeom_nexus::{detector_group, emit, Layout, OutputMode};
/// # use nxgeom_tubes::{generate_detector, InstrumentConstants};
/// let detector = generate_detector(&InstrumentConstants::default()).unwrap();
/// let mode = OutputMode::Splice {
///     baseline: "bifrost_baseline.json".into(),
/// };
///
/// emit(
///     detector_group("bifrost_detector", &detector),
///     &mode,
///     "bifrost_baseline_with_detector.json",
///     Layout::Pretty,
/// )
/// .unwrap();
/// ```
pub fn emit<P: AsRef<Path>>(
    detector: Node,
    mode: &OutputMode,
    output: P,
    layout: Layout,
) -> Result<Document> {
    let output = output.as_ref();

    let document = match mode {
        OutputMode::New => {
            debug!("Creating new document");
            Document::with_detector(detector)
        }
        OutputMode::Splice { baseline } => {
            if same_file(baseline, output) {
                return Err(Error::OverwriteBaseline(baseline.clone()));
            }
            let mut document = read_document(baseline)?;
            document.splice(&INSTRUMENT_PATH, detector)?;
            info!("Spliced detector into {}", baseline.display());
            document
        }
    };

    write_document(&document, output, layout)?;
    Ok(document)
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
