//! Result and Error types for the tube bank module

/// Type alias for `Result<T, tubes::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug, PartialEq)]
/// The error type for `nxgeom-tubes`
pub enum Error {
    /// One radial offset is needed for every column of banks
    #[error("expected {expected} radial offsets (one per column), found {found}")]
    RadialOffsetCount { expected: usize, found: usize },

    /// One curvature offset is needed for every row of banks
    #[error("expected {expected} curvature offsets (one per row), found {found}")]
    CurvatureCount { expected: usize, found: usize },

    /// Counts of banks, tubes or pixels that would produce nothing
    #[error("\"{0}\" must be at least 1")]
    ZeroCount(&'static str),

    /// Lengths must be finite and strictly positive
    #[error("\"{name}\" must be a positive length (found {value})")]
    InvalidLength { name: &'static str, value: f64 },

    /// Distances and angles must be finite
    #[error("\"{name}\" must be finite (found {value})")]
    NonFinite { name: &'static str, value: f64 },

    /// Total pixel count does not fit in a 32-bit detector number
    #[error(
        "{banks} banks of {tubes} tubes with {pixels} pixels each exceed the 32-bit detector number range"
    )]
    TooManyPixels {
        banks: usize,
        tubes: usize,
        pixels: usize,
    },
}
