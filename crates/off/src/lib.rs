//! Reading and writing OFF polyhedron mesh files
//!
//! The Object File Format is about as simple as a mesh format gets:
//!
//! ```text
//! OFF
//! # free text comment
//! <vertex count> <face count> 0
//! x y z                 <- one line per vertex
//! n i0 i1 ... i(n-1)    <- one line per face, 0-based vertex indices
//! ```
//!
//! Any mesh represented as a [Polyhedron] may be written with [write_off()],
//! and generated files can be read back with [read_off()] for inspection.
//!
//! ```rust, no_run
//! # use nxgeom_off::{read_off, write_off, Polyhedron};
//! # use nalgebra::Vector3;
//! let mesh = Polyhedron {
//!     vertices: vec![
//!         Vector3::new(0.0, 0.0, 0.0),
//!         Vector3::new(1.0, 0.0, 0.0),
//!         Vector3::new(0.0, 1.0, 0.0),
//!     ],
//!     faces: vec![vec![0, 1, 2]],
//! };
//!
//! write_off(&mesh, "single triangle", "./triangle.off").unwrap();
//! assert_eq!(read_off("./triangle.off").unwrap(), mesh);
//! ```

// Split into subfiles for development, but anything important is re-exported
mod error;
mod parsers;
mod polyhedron;
mod reader;
mod writer;

#[doc(inline)]
pub use polyhedron::Polyhedron;

#[doc(inline)]
pub use reader::{parse_off, read_off};

#[doc(inline)]
pub use writer::{write_off, write_off_to};

#[doc(inline)]
pub use error::{Error, Result};
