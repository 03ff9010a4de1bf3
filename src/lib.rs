//! `nxgeom` is a set of libraries for generating detector geometry for
//! neutron scattering instruments
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of the member crates.
#[doc(inline)]
pub use nxgeom_transform as transform;

#[doc(inline)]
pub use nxgeom_utils as utils;

#[cfg(feature = "nexus")]
#[cfg_attr(docsrs, doc(cfg(feature = "nexus")))]
#[doc(inline)]
pub use nxgeom_nexus as nexus;

#[cfg(feature = "off")]
#[cfg_attr(docsrs, doc(cfg(feature = "off")))]
#[doc(inline)]
pub use nxgeom_off as off;

#[cfg(feature = "stream")]
#[cfg_attr(docsrs, doc(cfg(feature = "stream")))]
#[doc(inline)]
pub use nxgeom_stream as stream;

#[cfg(feature = "tubes")]
#[cfg_attr(docsrs, doc(cfg(feature = "tubes")))]
#[doc(inline)]
pub use nxgeom_tubes as tubes;

#[cfg(feature = "voxels")]
#[cfg_attr(docsrs, doc(cfg(feature = "voxels")))]
#[doc(inline)]
pub use nxgeom_voxels as voxels;
