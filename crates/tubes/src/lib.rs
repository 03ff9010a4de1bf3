//! Pixel positions for banks of straight detector tubes
//!
//! Tubes are grouped into banks (e.g. the BIFROST triplets) that share one
//! rigid placement. The pipeline is:
//!
//! 1. Lay out the pixel grid of a single bank in local coordinates
//! 2. Work out every bank's rotation and radial position from its column and
//!    row in the instrument
//! 3. Push the local grid through each bank's placement and concatenate
//!
//! ```rust
//! # use nxgeom_tubes::{generate_detector, InstrumentConstants};
//! let constants = InstrumentConstants::default();
//! let detector = generate_detector(&constants).unwrap();
//!
//! assert_eq!(detector.len(), constants.total_pixels());
//! assert_eq!(detector.pixels[0].id, 0);
//! ```
//!
//! Every [Pixel] carries its own detector number and position, so the ids and
//! coordinates can never drift out of alignment. Flat arrays for output
//! formats are only produced at the end by [TubeDetector::offsets()].

// Split into subfiles for development, but anything important is re-exported
mod bank;
mod constants;
mod detector;
mod error;

#[doc(inline)]
pub use bank::{bank_specs, local_bank_offsets, place_bank, BankSpec};

#[doc(inline)]
pub use constants::{InstrumentConstants, TubeGeometry};

#[doc(inline)]
pub use detector::{generate_detector, generate_pixels, Pixel, PixelOffsets, PixelShape, TubeDetector};

#[doc(inline)]
pub use error::{Error, Result};
