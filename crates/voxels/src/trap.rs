//! General trapezoid solids in the style of GEANT4 `G4Trap`

// external crates
use nalgebra::Vector3;

/// The 11 shape parameters of a general trapezoid
///
/// Lengths are half-lengths and angles are in radians, exactly as for the
/// GEANT4 `G4Trap` constructor.
///
/// | Field  | Meaning                                                    |
/// | ------ | ---------------------------------------------------------- |
/// | `dz`   | half-length along z                                        |
/// | `theta`| polar angle of the line joining the centres of the z faces |
/// | `phi`  | azimuthal angle of the same line                           |
/// | `dy1`  | half-length in y of the face at -dz                        |
/// | `dx1`  | half-length in x of the -y edge of the face at -dz         |
/// | `dx2`  | half-length in x of the +y edge of the face at -dz         |
/// | `alp1` | shear angle of the face at -dz                             |
/// | `dy2`  | half-length in y of the face at +dz                        |
/// | `dx3`  | half-length in x of the -y edge of the face at +dz         |
/// | `dx4`  | half-length in x of the +y edge of the face at +dz         |
/// | `alp2` | shear angle of the face at +dz                             |
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TrapParameters {
    pub dz: f64,
    pub theta: f64,
    pub phi: f64,
    pub dy1: f64,
    pub dx1: f64,
    pub dx2: f64,
    pub alp1: f64,
    pub dy2: f64,
    pub dx3: f64,
    pub dx4: f64,
    pub alp2: f64,
}

impl TrapParameters {
    /// Right trapezoid with no tilt or shear
    ///
    /// The faces at -dz and +dz are symmetric in x, so `dx1 = dx2` and
    /// `dx3 = dx4`. A box if all half-widths and both `dy` are equal.
    pub fn right(dz: f64, dy1: f64, dx1: f64, dy2: f64, dx3: f64) -> Self {
        Self {
            dz,
            dy1,
            dx1,
            dx2: dx1,
            dy2,
            dx3,
            dx4: dx3,
            ..Default::default()
        }
    }

    /// The 8 corners of the solid in its local frame
    ///
    /// Closed form corners from the GEANT4 `G4Trap` implementation. Every
    /// corner is a fixed linear combination of the parameters.
    pub fn vertices(&self) -> TrapVertices {
        let tan_theta = self.theta.tan();
        let ttheta_cphi = tan_theta * self.phi.cos();
        let ttheta_sphi = tan_theta * self.phi.sin();
        let talpha1 = self.alp1.tan();
        let talpha2 = self.alp2.tan();

        let (dz, dy1, dy2) = (self.dz, self.dy1, self.dy2);

        TrapVertices([
            Vector3::new(
                -dz * ttheta_cphi - dy1 * talpha1 - self.dx1,
                -dz * ttheta_sphi - dy1,
                -dz,
            ),
            Vector3::new(
                -dz * ttheta_cphi - dy1 * talpha1 + self.dx1,
                -dz * ttheta_sphi - dy1,
                -dz,
            ),
            Vector3::new(
                -dz * ttheta_cphi + dy1 * talpha1 - self.dx2,
                -dz * ttheta_sphi + dy1,
                -dz,
            ),
            Vector3::new(
                -dz * ttheta_cphi + dy1 * talpha1 + self.dx2,
                -dz * ttheta_sphi + dy1,
                -dz,
            ),
            Vector3::new(
                dz * ttheta_cphi - dy2 * talpha2 - self.dx3,
                dz * ttheta_sphi - dy2,
                dz,
            ),
            Vector3::new(
                dz * ttheta_cphi - dy2 * talpha2 + self.dx3,
                dz * ttheta_sphi - dy2,
                dz,
            ),
            Vector3::new(
                dz * ttheta_cphi + dy2 * talpha2 - self.dx4,
                dz * ttheta_sphi + dy2,
                dz,
            ),
            Vector3::new(
                dz * ttheta_cphi + dy2 * talpha2 + self.dx4,
                dz * ttheta_sphi + dy2,
                dz,
            ),
        ])
    }
}

/// Corners of a trapezoid in a fixed order
///
/// ```text
///  index   face   y edge   x side
///    0     -dz     -y       -x
///    1     -dz     -y       +x
///    2     -dz     +y       -x
///    3     -dz     +y       +x
///    4     +dz     -y       -x
///    5     +dz     -y       +x
///    6     +dz     +y       -x
///    7     +dz     +y       +x
/// ```
///
/// The face template used to build meshes depends on this order, so the
/// corners are only ever exposed as a fixed size array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrapVertices(pub [Vector3<f64>; 8]);

impl TrapVertices {
    /// Borrow the corners in order
    pub fn as_array(&self) -> &[Vector3<f64>; 8] {
        &self.0
    }

    /// Apply the same mapping to every corner, keeping the order
    pub fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(Vector3<f64>) -> Vector3<f64>,
    {
        Self(self.0.map(f))
    }
}

impl std::ops::Index<usize> for TrapVertices {
    type Output = Vector3<f64>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn box_edges() {
        let v = TrapParameters::right(3.0, 2.0, 1.0, 2.0, 1.0).vertices();

        // opposite edges are equal
        let x_edge = v[1] - v[0];
        assert_relative_eq!(v[3] - v[2], x_edge);
        assert_relative_eq!(v[5] - v[4], x_edge);
        assert_relative_eq!(v[7] - v[6], x_edge);

        let y_edge = v[2] - v[0];
        assert_relative_eq!(v[3] - v[1], y_edge);
        assert_relative_eq!(v[6] - v[4], y_edge);
        assert_relative_eq!(v[7] - v[5], y_edge);

        let z_edge = v[4] - v[0];
        assert_relative_eq!(v[5] - v[1], z_edge);
        assert_relative_eq!(v[6] - v[2], z_edge);
        assert_relative_eq!(v[7] - v[3], z_edge);

        // and orthogonal to adjacent edges
        assert_eq!(x_edge.dot(&y_edge), 0.0);
        assert_eq!(x_edge.dot(&z_edge), 0.0);
        assert_eq!(y_edge.dot(&z_edge), 0.0);

        // with the expected full lengths
        assert_eq!(x_edge.norm(), 2.0);
        assert_eq!(y_edge.norm(), 4.0);
        assert_eq!(z_edge.norm(), 6.0);
    }

    #[test]
    fn centred_on_origin() {
        let v = TrapParameters::right(5.0, 1.0, 2.0, 3.0, 4.0).vertices();
        let centroid = v.as_array().iter().sum::<Vector3<f64>>() / 8.0;
        assert_relative_eq!(centroid, Vector3::zeros());
    }

    #[test]
    fn tilted_faces_shift() {
        let trap = TrapParameters {
            theta: 0.3,
            phi: 0.0,
            ..TrapParameters::right(2.0, 1.0, 1.0, 1.0, 1.0)
        };
        let v = trap.vertices();

        // the +dz face moves by +dz*tan(theta) in x, the -dz face by the same in -x
        let shift = 2.0 * 0.3f64.tan();
        assert_relative_eq!(v[4].x - v[0].x, 2.0 * shift, epsilon = 1e-12);
        assert_relative_eq!(v[4].y, v[0].y, epsilon = 1e-12);
    }

    #[test]
    fn shear_moves_plus_y_edge() {
        let trap = TrapParameters {
            alp1: 0.2,
            ..TrapParameters::right(1.0, 1.0, 1.0, 1.0, 1.0)
        };
        let v = trap.vertices();
        let shear = 0.2f64.tan();
        assert_relative_eq!(v[2].x, -1.0 + shear, epsilon = 1e-12);
        assert_relative_eq!(v[0].x, -1.0 - shear, epsilon = 1e-12);
        // +dz face is untouched
        assert_relative_eq!(v[4].x, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn reference_corners() {
        let trap = TrapParameters {
            dz: 1.5,
            theta: 0.1,
            phi: 0.7,
            dy1: 2.0,
            dx1: 0.5,
            dx2: 0.75,
            alp1: 0.05,
            dy2: 2.5,
            dx3: 0.6,
            dx4: 0.9,
            alp2: -0.04,
        };
        let v = trap.vertices();

        let tc = 0.1f64.tan() * 0.7f64.cos();
        let ts = 0.1f64.tan() * 0.7f64.sin();
        let expected_0 = Vector3::new(-1.5 * tc - 2.0 * 0.05f64.tan() - 0.5, -1.5 * ts - 2.0, -1.5);
        let expected_7 = Vector3::new(
            1.5 * tc + 2.5 * (-0.04f64).tan() + 0.9,
            1.5 * ts + 2.5,
            1.5,
        );

        assert_relative_eq!(v[0], expected_0, epsilon = 1e-14);
        assert_relative_eq!(v[7], expected_7, epsilon = 1e-14);
    }
}
