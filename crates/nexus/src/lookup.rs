//! Pixel geometry queries over a generated document

// standard library
use std::collections::HashMap;
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::node::Document;
use crate::reader::read_document;

// external crates
use log::{debug, warn};
use nalgebra::Vector3;
use serde_json::Value;

/// Pixel positions read back from an instrument document
///
/// Every `detector_number` and `x/y/z_pixel_offset` dataset in the document
/// is collected depth first and zipped together, so a document holding more
/// than one detector is treated as one combined pixel set.
///
/// ```rust, no_run
/// # use nxgeom_nexus::DetectorGeometry;
/// let geometry = DetectorGeometry::read("bifrost_baseline_with_detector.json").unwrap();
/// let d = geometry.distance(0, 99).unwrap();
/// let v1 = geometry.vector_between(0, 99).unwrap();
/// let v2 = geometry.vector_between(0, 100).unwrap();
/// println!("{d} m apart, {} rad", DetectorGeometry::angle(&v1, &v2).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DetectorGeometry {
    pixels: HashMap<u64, Vector3<f64>>,
}

impl DetectorGeometry {
    /// Collect pixel ids and offsets from a document
    pub fn from_document(document: &Document) -> Result<Self> {
        let ids = collect(document, "detector_number", |v| v.as_u64())?;
        let x = collect(document, "x_pixel_offset", |v| v.as_f64())?;
        let y = collect(document, "y_pixel_offset", |v| v.as_f64())?;
        let z = collect(document, "z_pixel_offset", |v| v.as_f64())?;

        if x.len() != ids.len() || y.len() != ids.len() || z.len() != ids.len() {
            return Err(Error::MisalignedArrays {
                ids: ids.len(),
                x: x.len(),
                y: y.len(),
                z: z.len(),
            });
        }

        let mut pixels = HashMap::with_capacity(ids.len());
        for (i, id) in ids.into_iter().enumerate() {
            if pixels.insert(id, Vector3::new(x[i], y[i], z[i])).is_some() {
                warn!("Duplicate pixel {id}, keeping the last position");
            }
        }

        debug!("Collected {} pixels", pixels.len());
        Ok(Self { pixels })
    }

    /// Read a document and collect its pixels
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_document(&read_document(path)?)
    }

    /// Number of distinct pixels
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True if the document held no pixels
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Global position of a pixel
    pub fn pixel_to_coordinate(&self, id: u64) -> Result<Vector3<f64>> {
        self.pixels
            .get(&id)
            .copied()
            .ok_or(Error::UnknownPixel(id))
    }

    /// Vector from pixel `a` to pixel `b`
    pub fn vector_between(&self, a: u64, b: u64) -> Result<Vector3<f64>> {
        Ok(self.pixel_to_coordinate(b)? - self.pixel_to_coordinate(a)?)
    }

    /// Straight line distance between two pixels
    pub fn distance(&self, a: u64, b: u64) -> Result<f64> {
        Ok(self.vector_between(a, b)?.norm())
    }

    /// Angle between two vectors in radians, from 0 to pi
    pub fn angle(v1: &Vector3<f64>, v2: &Vector3<f64>) -> Result<f64> {
        if v1.norm() == 0.0 || v2.norm() == 0.0 {
            return Err(Error::ZeroVector);
        }
        Ok(v1.angle(v2))
    }
}

/// Compare computed values against expected references
///
/// A value outside the precision is always logged as a warning. With `fatal`
/// set it is also returned as [Error::ToleranceExceeded] so the caller stops,
/// otherwise the check just reports `false` and carries on.
///
/// ```rust
/// # use nxgeom_nexus::ToleranceCheck;
/// let lenient = ToleranceCheck { fatal: false };
/// assert_eq!(lenient.check(1.0, 1.05, 0.1).unwrap(), true);
/// assert_eq!(lenient.check(1.0, 1.5, 0.1).unwrap(), false);
///
/// let strict = ToleranceCheck { fatal: true };
/// assert!(strict.check(1.0, 1.5, 0.1).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToleranceCheck {
    /// Fail on the first value outside the precision
    pub fatal: bool,
}

impl ToleranceCheck {
    /// True if `value` is within `precision` of `expected`
    pub fn check(&self, value: f64, expected: f64, precision: f64) -> Result<bool> {
        let difference = (value - expected).abs();
        if difference <= precision {
            return Ok(true);
        }

        warn!("value error: {value} - {expected} ({difference}) > {precision}");
        if self.fatal {
            Err(Error::ToleranceExceeded {
                value,
                expected,
                precision,
            })
        } else {
            Ok(false)
        }
    }
}

/// Flattened values of every dataset named `name`
fn collect<T, F>(document: &Document, name: &str, convert: F) -> Result<Vec<T>>
where
    F: Fn(&Value) -> Option<T> + Copy,
{
    let mut values = Vec::new();
    for config in document.datasets(name) {
        if let Some(v) = &config.values {
            flatten(v, &mut values, convert).ok_or_else(|| Error::InvalidValues(name.into()))?;
        }
    }
    Ok(values)
}

fn flatten<T, F>(value: &Value, out: &mut Vec<T>, convert: F) -> Option<()>
where
    F: Fn(&Value) -> Option<T> + Copy,
{
    match value {
        Value::Array(items) => {
            for item in items {
                flatten(item, out, convert)?;
            }
        }
        other => out.push(convert(other)?),
    }
    Some(())
}
