//! Result and Error types for the voxel module

/// Type alias for `Result<T, voxels::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `nxgeom-voxels`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Lookup table row that could not be parsed
    #[error("invalid lookup table row at line {line}: \"{content}\"")]
    InvalidRow { line: usize, content: String },

    /// Module number with no placement in the sumo table
    #[error("no placement defined for sumo {0}")]
    UnknownSumo(u32),

    /// The same module number was given more than one placement
    #[error("sumo {0} has more than one placement")]
    DuplicateSumo(u32),

    /// A face refers to a vertex outside of the voxel that owns it
    #[error("face {face} references vertex {index} outside of voxel {voxel}")]
    FaceOutsideVoxel {
        face: usize,
        voxel: usize,
        index: usize,
    },

    /// Vertex or face totals inconsistent with the number of voxels
    #[error("inconsistent mesh, {vertices} vertices and {faces} faces")]
    InconsistentMesh { vertices: usize, faces: usize },
}
