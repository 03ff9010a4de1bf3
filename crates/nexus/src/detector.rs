//! Detector subtrees built from generated pixels

// crate modules
use crate::node::{Document, Node};

// nxgeom modules
use nxgeom_tubes::TubeDetector;

// external crates
use serde_json::Value;

/// Path from the document root to the node detectors are attached to
pub const INSTRUMENT_PATH: [&str; 2] = ["entry", "instrument"];

/// `NXdetector` group holding every pixel of a tube detector
///
/// ```text
/// <name> (NXdetector)
/// ├── detector_number            int32
/// ├── pixel_shape (NXcylindrical_geometry)
/// │   ├── cylinders              int32
/// │   └── vertices               float, m
/// ├── x_pixel_offset             float, m
/// ├── y_pixel_offset             float, m
/// └── z_pixel_offset             float, m
/// ```
pub fn detector_group(name: &str, detector: &TubeDetector) -> Node {
    let offsets = detector.offsets();

    let cylinders = Value::from(vec![Value::from(detector.shape.cylinders.to_vec())]);
    let vertices = detector
        .shape
        .vertices
        .iter()
        .map(|v| Value::from(v.to_vec()))
        .collect::<Vec<Value>>();

    let pixel_shape = Node::group("pixel_shape")
        .with_child(Node::dataset("cylinders", cylinders, "int32"))
        .with_child(Node::dataset("vertices", vertices, "float").with_units("m"))
        .with_class("NXcylindrical_geometry");

    Node::group(name)
        .with_child(Node::dataset("detector_number", offsets.ids, "int32"))
        .with_child(pixel_shape)
        .with_child(Node::dataset("x_pixel_offset", offsets.x, "float").with_units("m"))
        .with_child(Node::dataset("y_pixel_offset", offsets.y, "float").with_units("m"))
        .with_child(Node::dataset("z_pixel_offset", offsets.z, "float").with_units("m"))
        .with_class("NXdetector")
}

impl Document {
    /// New `entry/instrument` document holding a single detector subtree
    pub fn with_detector(detector: Node) -> Self {
        let instrument = Node::group(INSTRUMENT_PATH[1])
            .with_child(detector)
            .with_class("NXinstrument");

        let entry = Node::group(INSTRUMENT_PATH[0])
            .with_child(instrument)
            .with_class("NXentry");

        Document {
            children: vec![entry],
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nxgeom_tubes::{generate_detector, InstrumentConstants, TubeGeometry};

    fn small_detector() -> TubeDetector {
        let constants = InstrumentConstants {
            tube: TubeGeometry {
                tubes_per_bank: 2,
                pixels_per_tube: 3,
                ..Default::default()
            },
            columns: 1,
            rows: 2,
            radial_offsets: vec![1.0],
            curvature: vec![0.0, 0.1],
            ..Default::default()
        };
        generate_detector(&constants).unwrap()
    }

    #[test]
    fn detector_subtree() {
        let node = detector_group("bifrost_detector", &small_detector());
        assert_eq!(node.name.as_deref(), Some("bifrost_detector"));
        assert_eq!(node.kind.as_deref(), Some("group"));
        assert_eq!(node.nx_class(), Some("NXdetector"));

        let ids = node.child("detector_number").unwrap().config.as_ref().unwrap();
        assert_eq!(ids.dtype.as_deref(), Some("int32"));
        assert_eq!(ids.values.as_ref().unwrap().as_array().unwrap().len(), 12);

        for axis in ["x_pixel_offset", "y_pixel_offset", "z_pixel_offset"] {
            let child = node.child(axis).unwrap();
            assert_eq!(child.attribute("units").unwrap(), "m");
            assert_eq!(child.config.as_ref().unwrap().dtype.as_deref(), Some("float"));
        }

        let shape = node.child("pixel_shape").unwrap();
        assert_eq!(shape.nx_class(), Some("NXcylindrical_geometry"));
        let cylinders = shape.child("cylinders").unwrap().config.as_ref().unwrap();
        assert_eq!(cylinders.values, Some(serde_json::json!([[0, 1, 2]])));
    }

    #[test]
    fn new_document_wrapper() {
        let detector = detector_group("bifrost_detector", &small_detector());
        let mut doc = Document::with_detector(detector.clone());

        assert_eq!(doc.children[0].nx_class(), Some("NXentry"));
        let instrument = doc.locate_mut(&INSTRUMENT_PATH).unwrap();
        assert_eq!(instrument.nx_class(), Some("NXinstrument"));
        assert_eq!(instrument.children, Some(vec![detector]));
    }
}
