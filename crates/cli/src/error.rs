//! Result and Error types for the command line tool

// standard library
use std::path::PathBuf;

/// Type alias for `Result<T, cli::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `nxgeom-cli`
pub enum Error {
    /// Failure reading a configuration file
    #[error("unable to read {path:?}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration file that is not valid JSON for the pipeline
    #[error("invalid configuration in {path:?}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Settings that parse but can not be used together
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failure to serialise an example configuration
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    /// Tube detector generation failure
    #[error("tube detector generation failed")]
    Tubes(#[from] nxgeom_tubes::Error),

    /// Voxel mesh generation failure
    #[error("voxel mesh generation failed")]
    Voxels(#[from] nxgeom_voxels::Error),

    /// Document read, write, or query failure
    #[error("instrument document operation failed")]
    Nexus(#[from] nxgeom_nexus::Error),

    /// Mesh file failure
    #[error("OFF mesh operation failed")]
    Off(#[from] nxgeom_off::Error),
}
