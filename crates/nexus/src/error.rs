//! Result and Error types for the document module

// standard library
use std::path::PathBuf;

/// Type alias for `Result<T, nexus::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `nxgeom-nexus`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure to parse or serialise a JSON document
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    /// No node at the requested path, e.g. a baseline without `instrument`
    #[error("no node found at \"{path}\"")]
    MissingNode { path: String },

    /// Refusing to write a spliced document over its own baseline
    #[error("output would overwrite the baseline {0:?}")]
    OverwriteBaseline(PathBuf),

    /// Detector number not present in the document
    #[error("pixel {0} not found in the detector")]
    UnknownPixel(u64),

    /// Pixel ids and offsets of differing lengths
    #[error("misaligned pixel arrays, {ids} ids with {x}/{y}/{z} x/y/z offsets")]
    MisalignedArrays {
        ids: usize,
        x: usize,
        y: usize,
        z: usize,
    },

    /// Dataset values that are not the expected numbers
    #[error("dataset \"{0}\" does not hold the expected numeric values")]
    InvalidValues(String),

    /// Angles are undefined for zero length vectors
    #[error("angle undefined for a zero length vector")]
    ZeroVector,

    /// Tolerance check failure when configured to be fatal
    #[error("value {value} differs from {expected} by more than {precision}")]
    ToleranceExceeded {
        value: f64,
        expected: f64,
        precision: f64,
    },
}
