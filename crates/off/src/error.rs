//! Result and Error types for the OFF module

/// Type alias for `Result<T, off::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `nxgeom-off`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// First meaningful line was not the `OFF` tag
    #[error("expected \"OFF\" header, found \"{0}\"")]
    MissingHeader(String),

    /// Vertex or face line that could not be parsed
    #[error("unable to parse line {line}: \"{content}\"")]
    InvalidLine { line: usize, content: String },

    /// File ended before all declared vertices and faces were read
    #[error("expected {expected} {kind} but found {found}")]
    UnexpectedCount {
        kind: &'static str,
        expected: usize,
        found: usize,
    },
}
