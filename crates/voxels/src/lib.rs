//! Trapezoidal voxel meshes for voxel-based detectors
//!
//! Detectors such as the DREAM end-cap are described by a lookup table with
//! one row per voxel. Every voxel is a GEANT4 style trapezoid, so the mesh is
//! built as:
//!
//! 1. Read the lookup table into [LookupRow]s
//! 2. Generate the 8 local corners of each voxel with [TrapParameters]
//! 3. Move each corner into the module (sumo) frame and then into the global
//!    frame with a [VoxelPlacement]
//! 4. Attach 6 quadrilateral faces to every voxel from the [FACE_TEMPLATE]
//!
//! ```rust, no_run
//! # use nxgeom_voxels::{assemble_mesh, read_lookup_table, VoxelPlacement};
//! # use nxgeom_off::write_off;
//! let rows = read_lookup_table("LookupTableDreamEndCap_noRRT.txt").unwrap();
//! let mesh = assemble_mesh(&rows, &VoxelPlacement::default()).unwrap();
//!
//! write_off(&mesh.to_polyhedron(), "DREAM End-Cap Sector 3", "DREAM_endCap_sector.off").unwrap();
//! ```
//!
//! Any module number missing from the placement tables is a hard error. There
//! is no sensible default position for an unknown piece of detector.

// Split into subfiles for development, but anything important is re-exported
mod error;
mod lookup;
mod mesh;
mod parsers;
mod placement;
mod sumo;
mod trap;

#[doc(inline)]
pub use lookup::{parse_lookup_table, read_lookup_table, LookupRow};

#[doc(inline)]
pub use mesh::{
    assemble_mesh, winding_order, VoxelMesh, FACES_PER_VOXEL, FACE_TEMPLATE, VERTICES_PER_VOXEL,
};

#[doc(inline)]
pub use placement::VoxelPlacement;

#[doc(inline)]
pub use sumo::{SumoEntry, SumoPlacement, SumoTable};

#[doc(inline)]
pub use trap::{TrapParameters, TrapVertices};

#[doc(inline)]
pub use error::{Error, Result};
