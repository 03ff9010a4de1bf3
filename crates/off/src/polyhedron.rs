// external crates
use nalgebra::Vector3;

/// Vertices and polygon faces of a mesh
///
/// Faces are lists of 0-based indices into `vertices`. Nothing here checks
/// that the indices are in range or that the faces make a closed surface,
/// that is left to whatever built the mesh.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Polyhedron {
    /// Vertex coordinates
    pub vertices: Vec<Vector3<f64>>,
    /// Polygon faces as indices into `vertices`
    pub faces: Vec<Vec<usize>>,
}

impl Polyhedron {
    /// Number of vertices in the mesh
    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces in the mesh
    pub fn number_of_faces(&self) -> usize {
        self.faces.len()
    }
}

impl std::fmt::Display for Polyhedron {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Polyhedron {{ vertices: {}, faces: {} }}",
            self.number_of_vertices(),
            self.number_of_faces()
        )
    }
}
