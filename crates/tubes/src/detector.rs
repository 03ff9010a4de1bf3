//! Pixel records for a complete tube detector

// crate modules
use crate::bank::{bank_specs, local_bank_offsets, place_bank};
use crate::constants::{InstrumentConstants, TubeGeometry};
use crate::error::Result;

// nxgeom modules
use nxgeom_utils::SciFormat;

// external crates
use log::{debug, info};
use nalgebra::Vector3;
use rayon::prelude::*;

/// A single detector pixel in global coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    /// Detector number, equal to the position in the detector pixel list
    pub id: u32,
    /// Global position in metres
    pub position: Vector3<f64>,
}

impl std::fmt::Display for Pixel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<8}{:>13}{:>13}{:>13}",
            self.id,
            self.position.x.sci(5),
            self.position.y.sci(5),
            self.position.z.sci(5)
        )
    }
}

/// Cylindrical pixel shape shared by every pixel in a tube
///
/// Three vertices describe the cylinder: the centre of the first face, a
/// point on the edge of the first face, and the centre of the second face.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelShape {
    /// Indices into `vertices` for the single cylinder
    pub cylinders: [u32; 3],
    /// Cylinder vertices in metres, relative to the pixel offset
    pub vertices: [[f64; 3]; 3],
}

impl PixelShape {
    /// Cylinder of one pixel length along x with the tube radius
    pub fn from_tube(tube: &TubeGeometry) -> Self {
        Self {
            cylinders: [0, 1, 2],
            vertices: [
                [0.0, 0.0, 0.0],
                [0.0, tube.tube_radius, 0.0],
                [tube.pixel_length, 0.0, 0.0],
            ],
        }
    }
}

/// Flat per-axis arrays of pixel data
///
/// Every array has the same length and the same pixel order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PixelOffsets {
    /// Detector numbers
    pub ids: Vec<u32>,
    /// Global x coordinates
    pub x: Vec<f64>,
    /// Global y coordinates
    pub y: Vec<f64>,
    /// Global z coordinates
    pub z: Vec<f64>,
}

/// Every pixel of a tube detector along with its pixel shape
#[derive(Debug, Clone, PartialEq)]
pub struct TubeDetector {
    /// Pixels ordered by bank, then tube, then position along the tube
    pub pixels: Vec<Pixel>,
    /// Shape shared by all pixels
    pub shape: PixelShape,
}

impl TubeDetector {
    /// Number of pixels in the detector
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True if the detector has no pixels at all
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Split the pixel records into aligned per-axis arrays
    ///
    /// Done in a single pass so the arrays are aligned by construction.
    pub fn offsets(&self) -> PixelOffsets {
        let n = self.pixels.len();
        let mut offsets = PixelOffsets {
            ids: Vec::with_capacity(n),
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
            z: Vec::with_capacity(n),
        };

        for pixel in &self.pixels {
            offsets.ids.push(pixel.id);
            offsets.x.push(pixel.position.x);
            offsets.y.push(pixel.position.y);
            offsets.z.push(pixel.position.z);
        }

        offsets
    }
}

/// Global pixel records for every bank in the instrument
///
/// Banks are placed independently in parallel, but the output is always in
/// bank order with the local pixel order preserved inside each bank. Detector
/// numbers are assigned afterwards as a dense sequence from 0.
pub fn generate_pixels(constants: &InstrumentConstants) -> Result<Vec<Pixel>> {
    constants.validate()?;

    let local = local_bank_offsets(&constants.tube);
    let specs = bank_specs(constants);
    debug!(
        "Placing {} banks of {} pixels",
        specs.len(),
        constants.tube.pixels_per_bank()
    );

    let positions = specs
        .par_iter()
        .map(|spec| place_bank(&local, spec))
        .collect::<Vec<Vec<Vector3<f64>>>>();

    // `validate()` guarantees the total fits in a u32
    let pixels = positions
        .into_iter()
        .flatten()
        .enumerate()
        .map(|(id, position)| Pixel {
            id: id as u32,
            position,
        })
        .collect::<Vec<Pixel>>();

    info!("Generated {} pixels", pixels.len());
    Ok(pixels)
}

/// Complete tube detector, pixels and shape, from the instrument constants
pub fn generate_detector(constants: &InstrumentConstants) -> Result<TubeDetector> {
    Ok(TubeDetector {
        pixels: generate_pixels(constants)?,
        shape: PixelShape::from_tube(&constants.tube),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_stay_aligned() {
        let detector = generate_detector(&InstrumentConstants::default()).unwrap();
        let offsets = detector.offsets();

        assert_eq!(offsets.ids.len(), detector.len());
        assert_eq!(offsets.x.len(), detector.len());
        assert_eq!(offsets.y.len(), detector.len());
        assert_eq!(offsets.z.len(), detector.len());

        for (i, pixel) in detector.pixels.iter().enumerate() {
            assert_eq!(offsets.ids[i], pixel.id);
            assert_eq!(offsets.x[i], pixel.position.x);
            assert_eq!(offsets.y[i], pixel.position.y);
            assert_eq!(offsets.z[i], pixel.position.z);
        }
    }

    #[test]
    fn invalid_constants_fail() {
        let constants = InstrumentConstants {
            curvature: vec![],
            ..Default::default()
        };
        assert!(generate_pixels(&constants).is_err());
    }

    #[test]
    fn pixel_shape_from_tube() {
        let shape = PixelShape::from_tube(&TubeGeometry::default());
        assert_eq!(shape.cylinders, [0, 1, 2]);
        assert_eq!(shape.vertices[1], [0.0, 0.0127, 0.0]);
        assert_eq!(shape.vertices[2], [0.004, 0.0, 0.0]);
    }
}
