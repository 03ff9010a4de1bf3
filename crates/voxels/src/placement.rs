//! Module and detector placement of individual voxels

// crate modules
use crate::error::Result;
use crate::lookup::LookupRow;
use crate::sumo::SumoTable;
use crate::trap::TrapVertices;

// nxgeom modules
use nxgeom_transform::RigidTransform;

// external crates
use serde::{Deserialize, Serialize};

/// Everything needed to move voxels from the lookup table into place
///
/// Each voxel corner goes through the following steps, in this order:
///
/// 1. Translate by the voxel centre (into the module frame)
/// 2. Rotate by `tilt` degrees about y, so the modules do not face the sample
///    directly, which improves detection efficiency
/// 3. Rotate about x by the module angle
/// 4. Translate by the module offset
///
/// The order matters. Swapping any two steps gives a different detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoxelPlacement {
    /// Detector tilt about y, in degrees, shared by every voxel
    #[serde(default = "default_tilt")]
    pub tilt: f64,
    /// Module rotations and offsets
    #[serde(default)]
    pub sumos: SumoTable,
}

fn default_tilt() -> f64 {
    -10.0
}

impl Default for VoxelPlacement {
    fn default() -> Self {
        Self {
            tilt: default_tilt(),
            sumos: SumoTable::default(),
        }
    }
}

impl VoxelPlacement {
    /// Module-to-global transform for one module number
    ///
    /// Covers steps 2-4, i.e. everything after the voxel centre translation.
    pub fn sumo_transform(&self, sumo: u32) -> Result<RigidTransform> {
        let placement = self.sumos.get(sumo)?;
        Ok(RigidTransform::about_y(self.tilt.to_radians())
            .then(&RigidTransform::about_x(placement.angle.to_radians()))
            .then(&RigidTransform::from_translation(placement.translation)))
    }

    /// Full local-to-global transform for the voxel in a lookup table row
    pub fn transform_for(&self, row: &LookupRow) -> Result<RigidTransform> {
        Ok(RigidTransform::from_translation(row.centre()).then(&self.sumo_transform(row.sumo)?))
    }

    /// Global corners of the voxel in a lookup table row
    ///
    /// Corner order is unchanged from [TrapParameters::vertices()](crate::TrapParameters::vertices).
    pub fn place(&self, row: &LookupRow) -> Result<TrapVertices> {
        let transform = self.transform_for(row)?;
        Ok(row.trap().vertices().map(|v| transform.apply(&v)))
    }
}
