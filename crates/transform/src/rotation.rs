//! Elementary rotations about the x, y, and z axes

// external crates
use nalgebra::{Matrix3, Rotation3};

/// Rotation of `theta` radians about the x axis
///
/// ```text
/// | 1    0       0    |
/// | 0  cos(t) -sin(t) |
/// | 0  sin(t)  cos(t) |
/// ```
pub fn rotate_x(theta: f64) -> Rotation3<f64> {
    let (s, c) = theta.sin_cos();
    #[rustfmt::skip]
    let m = Matrix3::new(
        1.0, 0.0, 0.0,
        0.0,   c,  -s,
        0.0,   s,   c,
    );
    Rotation3::from_matrix_unchecked(m)
}

/// Rotation of `theta` radians about the y axis
///
/// ```text
/// |  cos(t)  0  sin(t) |
/// |    0     1    0    |
/// | -sin(t)  0  cos(t) |
/// ```
pub fn rotate_y(theta: f64) -> Rotation3<f64> {
    let (s, c) = theta.sin_cos();
    #[rustfmt::skip]
    let m = Matrix3::new(
          c, 0.0,   s,
        0.0, 1.0, 0.0,
         -s, 0.0,   c,
    );
    Rotation3::from_matrix_unchecked(m)
}

/// Rotation of `theta` radians about the z axis
///
/// ```text
/// | cos(t) -sin(t)  0 |
/// | sin(t)  cos(t)  0 |
/// |   0       0     1 |
/// ```
pub fn rotate_z(theta: f64) -> Rotation3<f64> {
    let (s, c) = theta.sin_cos();
    #[rustfmt::skip]
    let m = Matrix3::new(
          c,  -s, 0.0,
          s,   c, 0.0,
        0.0, 0.0, 1.0,
    );
    Rotation3::from_matrix_unchecked(m)
}
