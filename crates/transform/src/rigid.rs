//! Rotate-then-translate transforms and their composition

// crate modules
use crate::rotation::{rotate_x, rotate_y, rotate_z};

// external crates
use nalgebra::{Rotation3, Vector3};

/// A rotation followed by a translation
///
/// Applied to a point as `R·p + T`. Transforms compose in application order
/// with [then()](RigidTransform::then), and the order matters: rotating
/// then translating is not the same as translating then rotating.
///
/// ```rust
/// # use nxgeom_transform::RigidTransform;
/// # use nalgebra::Vector3;
/// let shift = RigidTransform::from_translation(Vector3::new(1.0, 0.0, 0.0));
/// let turn = RigidTransform::about_z(90f64.to_radians());
///
/// // (1,0,0) -> (0,1,0)
/// let a = shift.then(&turn).apply(&Vector3::zeros());
/// assert!((a - Vector3::new(0.0, 1.0, 0.0)).norm() < 1e-12);
///
/// // (0,0,0) -> (1,0,0)
/// let b = turn.then(&shift).apply(&Vector3::zeros());
/// assert!((b - Vector3::new(1.0, 0.0, 0.0)).norm() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidTransform {
    /// Rotation applied first
    pub rotation: Rotation3<f64>,
    /// Translation applied after the rotation
    pub translation: Vector3<f64>,
}

impl RigidTransform {
    /// The transform that leaves every point where it is
    pub fn identity() -> Self {
        Self {
            rotation: Rotation3::identity(),
            translation: Vector3::zeros(),
        }
    }

    /// Pure rotation with no translation
    pub fn from_rotation(rotation: Rotation3<f64>) -> Self {
        Self {
            rotation,
            translation: Vector3::zeros(),
        }
    }

    /// Pure translation with no rotation
    pub fn from_translation(translation: Vector3<f64>) -> Self {
        Self {
            rotation: Rotation3::identity(),
            translation,
        }
    }

    /// Pure rotation of `theta` radians about x
    pub fn about_x(theta: f64) -> Self {
        Self::from_rotation(rotate_x(theta))
    }

    /// Pure rotation of `theta` radians about y
    pub fn about_y(theta: f64) -> Self {
        Self::from_rotation(rotate_y(theta))
    }

    /// Pure rotation of `theta` radians about z
    pub fn about_z(theta: f64) -> Self {
        Self::from_rotation(rotate_z(theta))
    }

    /// Apply `self` first, then `next`
    ///
    /// For `next = (R2, T2)` this gives `(R2·R1, R2·T1 + T2)`.
    pub fn then(&self, next: &RigidTransform) -> Self {
        Self {
            rotation: next.rotation * self.rotation,
            translation: next.rotation * self.translation + next.translation,
        }
    }

    /// Map a point through the transform
    pub fn apply(&self, point: &Vector3<f64>) -> Vector3<f64> {
        self.rotation * point + self.translation
    }
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::identity()
    }
}
