//! Write operations for OFF files

// standard library
use std::io::Write;
use std::path::Path;

// crate modules
use crate::error::Result;
use crate::polyhedron::Polyhedron;

// nxgeom modules
use nxgeom_utils::write_atomic;

// external crates
use log::info;

/// Write a [Polyhedron] to an OFF file
///
/// The `comment` becomes the second line of the file, prefixed with `#`.
/// Output goes through a temporary file first, so a failure part way through
/// never leaves a truncated mesh at `path`.
///
/// ```rust, no_run
/// # use nxgeom_off::{write_off, Polyhedron};
/// let mesh = Polyhedron::default();
/// write_off(&mesh, "DREAM End-Cap Sector 3", "./sector.off").unwrap();
/// ```
pub fn write_off<P: AsRef<Path>>(polyhedron: &Polyhedron, comment: &str, path: P) -> Result<()> {
    write_atomic(path.as_ref(), |writer| write_off_to(polyhedron, comment, writer))?;
    info!(
        "Wrote {} vertices and {} faces to {}",
        polyhedron.number_of_vertices(),
        polyhedron.number_of_faces(),
        path.as_ref().display()
    );
    Ok(())
}

/// Write a [Polyhedron] in OFF format to any writer
///
/// ```rust
/// # use nxgeom_off::{write_off_to, Polyhedron};
/// # use nalgebra::Vector3;
/// let mesh = Polyhedron {
///     vertices: vec![Vector3::new(0.0, 0.5, 1.0)],
///     faces: vec![],
/// };
///
/// let mut buffer = Vec::new();
/// write_off_to(&mesh, "one point", &mut buffer).unwrap();
/// assert_eq!(String::from_utf8(buffer).unwrap(), "OFF\n# one point\n1 0 0\n0 0.5 1\n");
/// ```
pub fn write_off_to<W: Write>(
    polyhedron: &Polyhedron,
    comment: &str,
    writer: &mut W,
) -> std::io::Result<()> {
    writeln!(writer, "OFF")?;
    // a comment spanning lines would break the header
    writeln!(writer, "# {}", comment.replace(['\r', '\n'], " "))?;
    writeln!(
        writer,
        "{} {} 0",
        polyhedron.number_of_vertices(),
        polyhedron.number_of_faces()
    )?;

    for v in &polyhedron.vertices {
        writeln!(writer, "{} {} {}", v.x, v.y, v.z)?;
    }

    for face in &polyhedron.faces {
        write!(writer, "{}", face.len())?;
        for index in face {
            write!(writer, " {index}")?;
        }
        writeln!(writer)?;
    }

    Ok(())
}
