//! Physical constants describing the tube banks of an instrument

// crate modules
use crate::error::{Error, Result};

// external crates
use serde::{Deserialize, Serialize};

/// Layout of the tubes and pixels inside a single bank
///
/// All lengths are in metres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TubeGeometry {
    /// Outer radius of a tube
    pub tube_radius: f64,
    /// Length of a single pixel along the tube axis
    pub pixel_length: f64,
    /// Number of tubes stacked in each bank
    pub tubes_per_bank: usize,
    /// Gap left between neighbouring tubes in a bank
    #[serde(default)]
    pub tube_gap: f64,
    /// Number of pixels along each tube
    pub pixels_per_tube: usize,
}

impl TubeGeometry {
    /// Number of pixels in a single bank
    pub fn pixels_per_bank(&self) -> usize {
        self.tubes_per_bank * self.pixels_per_tube
    }

    /// Centre-to-centre distance between neighbouring tubes
    pub fn tube_pitch(&self) -> f64 {
        2.0 * self.tube_radius + self.tube_gap
    }

    /// Check the bank layout for anything that can not be generated
    pub fn validate(&self) -> Result<()> {
        positive("tube_radius", self.tube_radius)?;
        positive("pixel_length", self.pixel_length)?;
        finite("tube_gap", self.tube_gap)?;
        non_zero("tubes_per_bank", self.tubes_per_bank)?;
        non_zero("pixels_per_tube", self.pixels_per_tube)?;
        Ok(())
    }
}

impl Default for TubeGeometry {
    fn default() -> Self {
        Self {
            tube_radius: 0.0127,
            pixel_length: 0.004,
            tubes_per_bank: 3,
            tube_gap: 0.0,
            pixels_per_tube: 100,
        }
    }
}

/// Constants placing every bank in the instrument
///
/// Banks sit on a grid of `columns` x `rows`.
///
/// - Each column is rotated about the vertical (y) axis, with angles spread
///   evenly from `min_angle` to `max_angle` degrees.
/// - Each row in a column is pushed out radially, with distances spread evenly
///   from that column's `radial_offsets` entry to the same plus
///   `nominal_radial_distance`.
/// - Each row is also lifted by its `curvature` entry along y.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentConstants {
    /// Layout of pixels in a single bank
    #[serde(flatten)]
    pub tube: TubeGeometry,
    /// Number of bank columns (distinct rotations)
    pub columns: usize,
    /// Number of bank rows per column (distinct radial distances)
    pub rows: usize,
    /// Rotation of the first column, in degrees
    pub min_angle: f64,
    /// Rotation of the last column, in degrees
    pub max_angle: f64,
    /// Radial span from the first to the last row of a column
    pub nominal_radial_distance: f64,
    /// Radial distance of the first row, one per column
    pub radial_offsets: Vec<f64>,
    /// Offset along y, one per row
    pub curvature: Vec<f64>,
}

impl InstrumentConstants {
    /// Total number of banks in the instrument
    pub fn number_of_banks(&self) -> usize {
        self.columns * self.rows
    }

    /// Total number of pixels the instrument will generate
    pub fn total_pixels(&self) -> usize {
        self.number_of_banks() * self.tube.pixels_per_bank()
    }

    /// Total number of pixels, or `None` if any product overflows
    pub fn checked_total_pixels(&self) -> Option<usize> {
        self.columns
            .checked_mul(self.rows)?
            .checked_mul(self.tube.tubes_per_bank)?
            .checked_mul(self.tube.pixels_per_tube)
    }

    /// Check everything needed to generate the instrument is consistent
    ///
    /// Mismatched per-column or per-row tables are caught here rather than as
    /// an out of bounds index half way through generation.
    pub fn validate(&self) -> Result<()> {
        self.tube.validate()?;
        non_zero("columns", self.columns)?;
        non_zero("rows", self.rows)?;
        finite("min_angle", self.min_angle)?;
        finite("max_angle", self.max_angle)?;
        finite("nominal_radial_distance", self.nominal_radial_distance)?;

        if self.radial_offsets.len() != self.columns {
            return Err(Error::RadialOffsetCount {
                expected: self.columns,
                found: self.radial_offsets.len(),
            });
        }

        if self.curvature.len() != self.rows {
            return Err(Error::CurvatureCount {
                expected: self.rows,
                found: self.curvature.len(),
            });
        }

        for offset in &self.radial_offsets {
            finite("radial_offsets", *offset)?;
        }

        for offset in &self.curvature {
            finite("curvature", *offset)?;
        }

        let fits = self
            .checked_total_pixels()
            .is_some_and(|total| u32::try_from(total).is_ok());

        if !fits {
            return Err(Error::TooManyPixels {
                banks: self.columns.saturating_mul(self.rows),
                tubes: self.tube.tubes_per_bank,
                pixels: self.tube.pixels_per_tube,
            });
        }

        Ok(())
    }
}

impl Default for InstrumentConstants {
    /// Nine wedges of five triplets, roughly the BIFROST secondary spectrometer
    fn default() -> Self {
        Self {
            tube: TubeGeometry::default(),
            columns: 9,
            rows: 5,
            min_angle: -40.0,
            max_angle: 40.0,
            nominal_radial_distance: 0.6,
            radial_offsets: vec![1.1; 9],
            curvature: vec![0.0, 0.02, 0.04, 0.06, 0.08],
        }
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidLength { name, value })
    }
}

fn finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFinite { name, value })
    }
}

fn non_zero(name: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        Err(Error::ZeroCount(name))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(InstrumentConstants::default().validate(), Ok(()));
    }

    #[test]
    fn radial_offsets_per_column() {
        let constants = InstrumentConstants {
            radial_offsets: vec![1.0; 4],
            ..Default::default()
        };
        assert_eq!(
            constants.validate(),
            Err(Error::RadialOffsetCount {
                expected: 9,
                found: 4
            })
        );
    }

    #[test]
    fn curvature_per_row() {
        let constants = InstrumentConstants {
            rows: 2,
            ..Default::default()
        };
        assert_eq!(
            constants.validate(),
            Err(Error::CurvatureCount {
                expected: 2,
                found: 5
            })
        );
    }

    #[test]
    fn rejects_empty_banks() {
        let mut constants = InstrumentConstants::default();
        constants.tube.pixels_per_tube = 0;
        assert_eq!(
            constants.validate(),
            Err(Error::ZeroCount("pixels_per_tube"))
        );
    }

    #[test]
    fn rejects_negative_radius() {
        let mut constants = InstrumentConstants::default();
        constants.tube.tube_radius = -0.01;
        assert!(matches!(
            constants.validate(),
            Err(Error::InvalidLength {
                name: "tube_radius",
                ..
            })
        ));
    }

    #[test]
    fn flat_json_layout() {
        let json = r#"{
            "tube_radius": 0.0127,
            "pixel_length": 0.004,
            "tubes_per_bank": 3,
            "pixels_per_tube": 2,
            "columns": 1,
            "rows": 2,
            "min_angle": 0.0,
            "max_angle": 0.0,
            "nominal_radial_distance": 0.5,
            "radial_offsets": [1.0],
            "curvature": [0.0, 0.1]
        }"#;

        let constants: InstrumentConstants = serde_json::from_str(json).unwrap();
        assert_eq!(constants.tube.tube_gap, 0.0);
        assert_eq!(constants.tube.pixels_per_bank(), 6);
        assert_eq!(constants.validate(), Ok(()));
    }

    #[test]
    fn pixel_totals() {
        let constants = InstrumentConstants::default();
        assert_eq!(constants.number_of_banks(), 45);
        assert_eq!(constants.total_pixels(), 45 * 300);
        assert_eq!(constants.checked_total_pixels(), Some(45 * 300));
    }

    #[test]
    fn overflowing_counts_are_rejected() {
        let mut constants = InstrumentConstants::default();
        constants.tube.tubes_per_bank = 1 << 40;
        constants.tube.pixels_per_tube = 1 << 40;

        assert_eq!(constants.checked_total_pixels(), None);
        assert_eq!(
            constants.validate(),
            Err(Error::TooManyPixels {
                banks: 45,
                tubes: 1 << 40,
                pixels: 1 << 40,
            })
        );
    }

    #[test]
    fn beyond_detector_number_range() {
        let mut constants = InstrumentConstants::default();
        constants.tube.pixels_per_tube = 1 << 30;
        assert!(matches!(
            constants.validate(),
            Err(Error::TooManyPixels { .. })
        ));
    }
}
