//! Assembly of voxel corners and faces into a single mesh

// crate modules
use crate::error::{Error, Result};
use crate::lookup::LookupRow;
use crate::placement::VoxelPlacement;
use crate::trap::TrapVertices;

// nxgeom modules
use nxgeom_off::Polyhedron;

// external crates
use log::{debug, info, trace};
use nalgebra::Vector3;
use rayon::prelude::*;

/// Number of corners of every voxel
pub const VERTICES_PER_VOXEL: usize = 8;

/// Number of quadrilateral faces of every voxel
pub const FACES_PER_VOXEL: usize = 6;

/// Faces of a hexahedral voxel as indices into its [TrapVertices]
///
/// Each face is wound so that the right-hand rule gives an outward normal.
///
/// ```text
///  face   corners      side
///   0     0 2 3 1      -z (bottom)
///   1     0 4 6 2      -x
///   2     0 1 5 4      -y
///   3     1 3 7 5      +x
///   4     2 6 7 3      +y
///   5     4 5 7 6      +z (top)
/// ```
///
/// Global face indices are these plus `voxel * VERTICES_PER_VOXEL`.
pub const FACE_TEMPLATE: [[usize; 4]; FACES_PER_VOXEL] = [
    [0, 2, 3, 1],
    [0, 4, 6, 2],
    [0, 1, 5, 4],
    [1, 3, 7, 5],
    [2, 6, 7, 3],
    [4, 5, 7, 6],
];

/// Vertices and faces of a set of voxels
///
/// Vertices are stored voxel by voxel, 8 at a time, in [TrapVertices] order.
/// Faces are stored 6 at a time in [FACE_TEMPLATE] order, and only ever
/// reference the vertices of their own voxel.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VoxelMesh {
    /// Global vertex coordinates
    pub vertices: Vec<Vector3<f64>>,
    /// Quadrilateral faces as indices into `vertices`
    pub faces: Vec<[usize; 4]>,
}

impl VoxelMesh {
    /// Build a mesh from the placed corners of every voxel
    pub fn from_voxels(voxels: &[TrapVertices]) -> Self {
        Self {
            vertices: voxels.iter().flat_map(|v| v.as_array().iter().copied()).collect(),
            faces: winding_order(voxels.len()),
        }
    }

    /// Number of voxels in the mesh
    pub fn voxel_count(&self) -> usize {
        self.vertices.len() / VERTICES_PER_VOXEL
    }

    /// The 8 corners of a single voxel
    pub fn voxel(&self, index: usize) -> Option<&[Vector3<f64>]> {
        let start = index * VERTICES_PER_VOXEL;
        self.vertices.get(start..start + VERTICES_PER_VOXEL)
    }

    /// Check the vertex and face counts, and that no face spans two voxels
    pub fn check_topology(&self) -> Result<()> {
        let n = self.voxel_count();
        if self.vertices.len() != n * VERTICES_PER_VOXEL || self.faces.len() != n * FACES_PER_VOXEL
        {
            return Err(Error::InconsistentMesh {
                vertices: self.vertices.len(),
                faces: self.faces.len(),
            });
        }

        for (f, face) in self.faces.iter().enumerate() {
            let voxel = f / FACES_PER_VOXEL;
            let first = voxel * VERTICES_PER_VOXEL;
            let last = first + VERTICES_PER_VOXEL - 1;
            if let Some(index) = face.iter().find(|&&i| i < first || i > last) {
                return Err(Error::FaceOutsideVoxel {
                    face: f,
                    voxel,
                    index: *index,
                });
            }
        }

        Ok(())
    }

    /// Convert to a general polygon mesh for writing
    pub fn to_polyhedron(&self) -> Polyhedron {
        Polyhedron {
            vertices: self.vertices.clone(),
            faces: self.faces.iter().map(|face| face.to_vec()).collect(),
        }
    }
}

impl From<VoxelMesh> for Polyhedron {
    fn from(mesh: VoxelMesh) -> Self {
        Polyhedron {
            vertices: mesh.vertices,
            faces: mesh.faces.iter().map(|face| face.to_vec()).collect(),
        }
    }
}

/// Face table for `number_of_voxels` consecutive voxels
///
/// ```rust
/// # use nxgeom_voxels::winding_order;
/// let faces = winding_order(2);
/// assert_eq!(faces.len(), 12);
/// assert_eq!(faces[0], [0, 2, 3, 1]);
/// assert_eq!(faces[6], [8, 10, 11, 9]);
/// ```
pub fn winding_order(number_of_voxels: usize) -> Vec<[usize; 4]> {
    (0..number_of_voxels)
        .flat_map(|voxel| {
            let start = voxel * VERTICES_PER_VOXEL;
            FACE_TEMPLATE.map(|face| face.map(|i| start + i))
        })
        .collect()
}

/// Place every voxel in a lookup table and assemble the full mesh
///
/// Voxels are placed in parallel but always end up in table order. Module
/// numbers are all checked before any work is done, so an unknown module
/// fails straight away rather than part way through.
pub fn assemble_mesh(rows: &[LookupRow], placement: &VoxelPlacement) -> Result<VoxelMesh> {
    placement.sumos.validate_rows(rows)?;
    debug!("Placing {} voxels", rows.len());

    let voxels = rows
        .par_iter()
        .map(|row| {
            trace!(
                "sumo {} sector {} segment {}",
                row.sumo,
                row.sector(),
                row.segment()
            );
            placement.place(row)
        })
        .collect::<Result<Vec<TrapVertices>>>()?;

    let mesh = VoxelMesh::from_voxels(&voxels);
    info!(
        "Assembled {} voxels into {} vertices and {} faces",
        mesh.voxel_count(),
        mesh.vertices.len(),
        mesh.faces.len()
    );
    Ok(mesh)
}
