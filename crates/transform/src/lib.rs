//! Rotations about the coordinate axes and rigid transform composition
//!
//! Every detector pipeline is the same shape: generate points in some local
//! frame, then push them through a fixed sequence of rotations and
//! translations into the global instrument frame.
//!
//! Rotations follow the right-handed convention, counter-clockwise when
//! looking down the positive axis towards the origin, with angles in radians.
//!
//! ```rust
//! # use nxgeom_transform::{rotate_y, RigidTransform};
//! # use nalgebra::Vector3;
//! // Rotate a point 90 degrees about y, then shift it along z
//! let transform = RigidTransform::from_rotation(rotate_y(90f64.to_radians()))
//!     .then(&RigidTransform::from_translation(Vector3::new(0.0, 0.0, 1.0)));
//!
//! let p = transform.apply(&Vector3::new(1.0, 0.0, 0.0));
//! assert!((p - Vector3::new(0.0, 0.0, 0.0)).norm() < 1e-12);
//! ```

// Split into subfiles for development, but anything important is re-exported
mod rigid;
mod rotation;

#[doc(inline)]
pub use rotation::{rotate_x, rotate_y, rotate_z};

#[doc(inline)]
pub use rigid::RigidTransform;
