//! Read operations for OFF files

// standard library
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::parsers;
use crate::polyhedron::Polyhedron;

// external crates
use log::debug;
use nalgebra::Vector3;

/// Read an OFF file into a [Polyhedron]
///
/// ```rust, no_run
/// # use nxgeom_off::read_off;
/// let mesh = read_off("./sector.off").unwrap();
/// println!("{mesh}");
/// ```
pub fn read_off<P: AsRef<Path>>(path: P) -> Result<Polyhedron> {
    let content = std::fs::read_to_string(path)?;
    parse_off(&content)
}

/// Parse the full text of an OFF file into a [Polyhedron]
///
/// Blank lines and `#` comments are skipped wherever they appear. The counts
/// in the header must match the number of vertex and face lines exactly.
///
/// ```rust
/// # use nxgeom_off::parse_off;
/// let text = "OFF\n# comment\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 2\n";
/// let mesh = parse_off(text).unwrap();
/// assert_eq!(mesh.faces, vec![vec![0, 1, 2]]);
/// ```
pub fn parse_off(content: &str) -> Result<Polyhedron> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(n, line)| (n + 1, line))
        .filter(|(_, line)| !parsers::is_ignored(line));

    // header tag
    match lines.next() {
        Some((_, line)) if parsers::is_header(line) => (),
        Some((_, line)) => return Err(Error::MissingHeader(line.trim().to_string())),
        None => return Err(Error::MissingHeader(String::new())),
    }

    // counts
    let (n_vertices, n_faces) = match lines.next() {
        Some((n, line)) => {
            let (_, (v, f, _)) = parsers::counts(line).map_err(|_| invalid(n, line))?;
            (v, f)
        }
        None => {
            return Err(Error::UnexpectedCount {
                kind: "count lines",
                expected: 1,
                found: 0,
            })
        }
    };
    debug!("OFF header declares {n_vertices} vertices and {n_faces} faces");

    // counts are untrusted, grow with the lines actually present
    let mut polyhedron = Polyhedron::default();

    for (n, line) in lines.by_ref().take(n_vertices) {
        let (_, [x, y, z]) = parsers::vertex(line).map_err(|_| invalid(n, line))?;
        polyhedron.vertices.push(Vector3::new(x, y, z));
    }

    if polyhedron.vertices.len() != n_vertices {
        return Err(Error::UnexpectedCount {
            kind: "vertices",
            expected: n_vertices,
            found: polyhedron.vertices.len(),
        });
    }

    for (n, line) in lines.by_ref().take(n_faces) {
        let (_, face) = parsers::face(line).map_err(|_| invalid(n, line))?;
        polyhedron.faces.push(face);
    }

    // anything left over is also a count mismatch
    let extra = lines.count();
    if polyhedron.faces.len() != n_faces || extra > 0 {
        return Err(Error::UnexpectedCount {
            kind: "faces",
            expected: n_faces,
            found: polyhedron.faces.len() + extra,
        });
    }

    Ok(polyhedron)
}

fn invalid(line: usize, content: &str) -> Error {
    Error::InvalidLine {
        line,
        content: content.to_string(),
    }
}
