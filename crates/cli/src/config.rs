//! JSON configuration for each pipeline

// standard library
use std::path::{Path, PathBuf};

// crate modules
use crate::error::{Error, Result};

// nxgeom modules
use nxgeom_nexus::{Layout, OutputMode};
use nxgeom_tubes::InstrumentConstants;
use nxgeom_voxels::VoxelPlacement;

// external crates
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Whether to write a new document or splice into a baseline
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeSetting {
    #[default]
    New,
    Splice,
}

/// Settings for the tube detector pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TubesConfig {
    /// `new` or `splice`
    #[serde(default)]
    pub output_mode: ModeSetting,
    /// Existing document to splice into, required for `splice`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_path: Option<PathBuf>,
    /// Document to write
    pub output_path: PathBuf,
    /// `pretty` or `compact`
    #[serde(default)]
    pub layout: Layout,
    /// Name of the generated `NXdetector` group
    #[serde(default = "default_detector_name")]
    pub detector_name: String,
    /// Bank and tube layout
    #[serde(default)]
    pub instrument: InstrumentConstants,
}

fn default_detector_name() -> String {
    "detector".into()
}

impl TubesConfig {
    /// Output mode, checking a baseline is given when splicing
    pub fn output_mode(&self) -> Result<OutputMode> {
        match (self.output_mode, &self.baseline_path) {
            (ModeSetting::New, _) => Ok(OutputMode::New),
            (ModeSetting::Splice, Some(baseline)) => Ok(OutputMode::Splice {
                baseline: baseline.clone(),
            }),
            (ModeSetting::Splice, None) => Err(Error::InvalidConfig(
                "\"splice\" output mode needs a \"baseline_path\"".into(),
            )),
        }
    }

    /// Check the settings can be used before generating anything
    pub fn validate(&self) -> Result<()> {
        self.instrument.validate()?;
        self.output_mode()?;
        Ok(())
    }
}

impl Default for TubesConfig {
    fn default() -> Self {
        Self {
            output_mode: ModeSetting::Splice,
            baseline_path: Some("bifrost_baseline.json".into()),
            output_path: "bifrost_baseline_with_detector.json".into(),
            layout: Layout::Pretty,
            detector_name: "bifrost_detector".into(),
            instrument: InstrumentConstants::default(),
        }
    }
}

/// Settings for the voxel mesh pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoxelsConfig {
    /// Whitespace separated voxel table
    pub lookup_table: PathBuf,
    /// Mesh file to write
    pub output_path: PathBuf,
    /// Comment line written into the mesh file
    #[serde(default)]
    pub comment: String,
    /// Detector tilt and module placements
    #[serde(flatten)]
    pub placement: VoxelPlacement,
}

impl VoxelsConfig {
    /// Check the settings can be used before generating anything
    pub fn validate(&self) -> Result<()> {
        if self.placement.sumos.is_empty() {
            return Err(Error::InvalidConfig("no sumo placements given".into()));
        }
        if !self.placement.tilt.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "tilt must be finite (found {})",
                self.placement.tilt
            )));
        }
        Ok(())
    }
}

impl Default for VoxelsConfig {
    fn default() -> Self {
        Self {
            lookup_table: "LookupTableDreamEndCap_noRRT.txt".into(),
            output_path: "DREAM_endCap_sector.off".into(),
            comment: "DREAM End-Cap Sector 3".into(),
            placement: VoxelPlacement::default(),
        }
    }
}

/// Read any configuration from a JSON file
pub fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!("Loading configuration from {}", path.display());
    let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
