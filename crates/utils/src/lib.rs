//! Shared helpers for the nxgeom crates
//!
//! Evenly spaced samples for instrument constants, writing output files
//! without leaving a truncated copy behind, and number formatting for
//! coordinate listings.

// Modules
mod atomic;
mod linspace;
mod sci;

// Flatten
pub use atomic::write_atomic;
pub use linspace::linspace;
pub use sci::SciFormat;
