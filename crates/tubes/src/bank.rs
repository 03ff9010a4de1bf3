//! Local pixel layout and rigid placement of individual banks

// crate modules
use crate::constants::{InstrumentConstants, TubeGeometry};

// nxgeom modules
use nxgeom_transform::RigidTransform;
use nxgeom_utils::{linspace, SciFormat};

// external crates
use log::trace;
use nalgebra::Vector3;

/// Placement of a single bank in the instrument
///
/// The bank is first moved out to `position`, then rotated by `rotation`
/// radians about the y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BankSpec {
    /// Rotation about y, in radians
    pub rotation: f64,
    /// Position of the bank origin before the rotation is applied
    pub position: Vector3<f64>,
}

impl BankSpec {
    /// The full local-to-global transform for pixels in this bank
    ///
    /// Local offsets are laid out with the tubes stacked along y, but the
    /// instrument has them stacked along z. A fixed 90 degree turn about x
    /// fixes the axis convention before the bank is positioned and rotated.
    pub fn transform(&self) -> RigidTransform {
        RigidTransform::about_x(90f64.to_radians())
            .then(&RigidTransform::from_translation(self.position))
            .then(&RigidTransform::about_y(self.rotation))
    }
}

impl std::fmt::Display for BankSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "BankSpec(rotation: {:.3} deg, position: [{}, {}, {}])",
            self.rotation.to_degrees(),
            self.position.x.sci(4),
            self.position.y.sci(4),
            self.position.z.sci(4),
        )
    }
}

/// Pixel offsets for a single bank in local coordinates
///
/// The outer loop is over tubes, stacked along y at the tube pitch, and the
/// inner loop is over pixels along each tube in x. Everything sits at z = 0.
///
/// ```rust
/// # use nxgeom_tubes::{local_bank_offsets, TubeGeometry};
/// let tube = TubeGeometry {
///     tube_radius: 0.0127,
///     pixel_length: 0.004,
///     tubes_per_bank: 3,
///     tube_gap: 0.0,
///     pixels_per_tube: 2,
/// };
///
/// let offsets = local_bank_offsets(&tube);
/// assert_eq!(offsets.len(), 6);
/// assert_eq!(offsets[1].x, 0.004);
/// assert_eq!(offsets[2].y, 0.0254);
/// ```
pub fn local_bank_offsets(tube: &TubeGeometry) -> Vec<Vector3<f64>> {
    let mut offsets = Vec::with_capacity(tube.pixels_per_bank());
    for i in 0..tube.tubes_per_bank {
        let y = i as f64 * tube.tube_pitch();
        for j in 0..tube.pixels_per_tube {
            let x = tube.pixel_length * j as f64;
            offsets.push(Vector3::new(x, y, 0.0));
        }
    }
    offsets
}

/// Placement for every bank in the instrument
///
/// Ordered by column, then by row within each column.
pub fn bank_specs(constants: &InstrumentConstants) -> Vec<BankSpec> {
    let angles = linspace(
        constants.min_angle.to_radians(),
        constants.max_angle.to_radians(),
        constants.columns,
    );

    let mut specs = Vec::with_capacity(constants.number_of_banks());
    for (column, angle) in angles.iter().enumerate() {
        let offset = constants.radial_offsets[column];
        let distances = linspace(
            offset,
            offset + constants.nominal_radial_distance,
            constants.rows,
        );

        for (row, distance) in distances.iter().enumerate() {
            let spec = BankSpec {
                rotation: *angle,
                position: Vector3::new(0.0, constants.curvature[row], *distance),
            };
            trace!("bank ({column}, {row}): {spec}");
            specs.push(spec);
        }
    }
    specs
}

/// Map local pixel offsets into global coordinates for one bank
///
/// The order of the output matches the order of `local` exactly.
pub fn place_bank(local: &[Vector3<f64>], bank: &BankSpec) -> Vec<Vector3<f64>> {
    let transform = bank.transform();
    local.iter().map(|offset| transform.apply(offset)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn small_tube() -> TubeGeometry {
        TubeGeometry {
            tube_radius: 0.0127,
            pixel_length: 0.004,
            tubes_per_bank: 3,
            tube_gap: 0.001,
            pixels_per_tube: 2,
        }
    }

    #[test]
    fn local_grid_order() {
        let offsets = local_bank_offsets(&small_tube());
        let pitch = 0.0254 + 0.001;

        let expected = [
            [0.0, 0.0],
            [0.004, 0.0],
            [0.0, pitch],
            [0.004, pitch],
            [0.0, 2.0 * pitch],
            [0.004, 2.0 * pitch],
        ];

        assert_eq!(offsets.len(), expected.len());
        for (offset, [x, y]) in offsets.iter().zip(expected) {
            assert_relative_eq!(offset.x, x, epsilon = 1e-15);
            assert_relative_eq!(offset.y, y, epsilon = 1e-15);
            assert_eq!(offset.z, 0.0);
        }
    }

    #[test]
    fn axis_correction_and_translation() {
        let local = local_bank_offsets(&small_tube());
        let bank = BankSpec {
            rotation: 0.0,
            position: Vector3::new(0.0, 0.0, 1.0),
        };

        let placed = place_bank(&local, &bank);
        assert_eq!(placed.len(), local.len());

        // tubes are stacked along z once the 90 degree correction is applied
        for (p, l) in placed.iter().zip(&local) {
            assert_relative_eq!(p.x, l.x, epsilon = 1e-12);
            assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
            assert_relative_eq!(p.z, 1.0 + l.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn bank_rotation_about_y() {
        let bank = BankSpec {
            rotation: 90f64.to_radians(),
            position: Vector3::new(0.0, 0.3, 2.0),
        };
        let placed = place_bank(&[Vector3::zeros()], &bank);
        assert_relative_eq!(placed[0], Vector3::new(2.0, 0.3, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn specs_column_major() {
        let constants = InstrumentConstants {
            columns: 3,
            rows: 2,
            min_angle: -10.0,
            max_angle: 10.0,
            nominal_radial_distance: 0.5,
            radial_offsets: vec![1.0, 1.1, 1.2],
            curvature: vec![0.0, 0.05],
            ..Default::default()
        };

        let specs = bank_specs(&constants);
        assert_eq!(specs.len(), 6);

        // first column
        assert_relative_eq!(specs[0].rotation, (-10f64).to_radians());
        assert_relative_eq!(specs[1].rotation, (-10f64).to_radians());
        assert_relative_eq!(specs[0].position, Vector3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(specs[1].position, Vector3::new(0.0, 0.05, 1.5));

        // last column
        assert_relative_eq!(specs[5].rotation, 10f64.to_radians());
        assert_relative_eq!(specs[4].position, Vector3::new(0.0, 0.0, 1.2));
        assert_relative_eq!(specs[5].position, Vector3::new(0.0, 0.05, 1.7));
    }
}
