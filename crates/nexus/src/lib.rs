//! NeXus-style JSON instrument documents for detector geometry
//!
//! Instrument descriptions for the file writer are JSON trees of groups and
//! datasets:
//!
//! ```json
//! {
//!     "children": [
//!         {
//!             "name": "entry",
//!             "type": "group",
//!             "children": [ ... ],
//!             "attributes": [{ "name": "NX_class", "values": "NXentry" }]
//!         }
//!     ]
//! }
//! ```
//!
//! Generated detectors become an `NXdetector` subtree with [detector_group()],
//! which is then either wrapped in a new `entry/instrument` document or
//! spliced into an existing baseline with [emit()].
//!
//! ```rust, no_run
//! # use nxgeom_nexus::{detector_group, emit, Layout, OutputMode};
//! # use nxgeom_tubes::{generate_detector, InstrumentConstants};
//! let detector = generate_detector(&InstrumentConstants::default()).unwrap();
//! let node = detector_group("bifrost_detector", &detector);
//!
//! emit(node, &OutputMode::New, "bifrost_detector.json", Layout::Compact).unwrap();
//! ```
//!
//! Generated documents can be read back with [DetectorGeometry] to check
//! distances and angles between pixels.

// Split into subfiles for development, but anything important is re-exported
mod detector;
mod error;
mod lookup;
mod node;
mod output;
mod reader;
mod writer;

#[doc(inline)]
pub use node::{Attribute, Config, Document, Node, NX_CLASS, UNITS};

#[doc(inline)]
pub use detector::{detector_group, INSTRUMENT_PATH};

#[doc(inline)]
pub use reader::{parse_document, read_document};

#[doc(inline)]
pub use writer::{to_string, write_document, write_to, Layout};

#[doc(inline)]
pub use output::{emit, OutputMode};

#[doc(inline)]
pub use lookup::{DetectorGeometry, ToleranceCheck};

#[doc(inline)]
pub use error::{Error, Result};
