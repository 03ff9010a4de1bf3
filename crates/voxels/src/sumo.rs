//! Placement of each detector module (sumo)

// standard library
use std::collections::BTreeMap;

// crate modules
use crate::error::{Error, Result};
use crate::lookup::LookupRow;

// external crates
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Rotation and offset shared by every voxel in one module
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SumoPlacement {
    /// Rotation about x, in degrees
    pub angle: f64,
    /// Offset applied after all rotations
    pub translation: Vector3<f64>,
}

/// A single entry of a [SumoTable] as written in configuration files
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SumoEntry {
    /// Module number
    pub sumo: u32,
    /// Rotation about x, in degrees
    pub angle: f64,
    /// Offset applied after all rotations
    pub translation: [f64; 3],
}

/// Explicit mapping from module number to its placement
///
/// Only the modules listed are valid. Looking up anything else is an
/// [Error::UnknownSumo], never a default.
///
/// Deserialises from a list of [SumoEntry] and rejects duplicate module
/// numbers, so a table loaded from a configuration file is always usable.
///
/// ```rust
/// # use nxgeom_voxels::{SumoTable, Error};
/// let table = SumoTable::default();
/// assert_eq!(table.get(4).unwrap().angle, 17.0);
/// assert!(matches!(table.get(7), Err(Error::UnknownSumo(7))));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SumoEntry>", into = "Vec<SumoEntry>")]
pub struct SumoTable(BTreeMap<u32, SumoPlacement>);

impl SumoTable {
    /// Build a table from entries, rejecting duplicate module numbers
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = SumoEntry>,
    {
        let mut table = BTreeMap::new();
        for entry in entries {
            let placement = SumoPlacement {
                angle: entry.angle,
                translation: Vector3::from(entry.translation),
            };
            if table.insert(entry.sumo, placement).is_some() {
                return Err(Error::DuplicateSumo(entry.sumo));
            }
        }
        Ok(Self(table))
    }

    /// Placement for a module number
    pub fn get(&self, sumo: u32) -> Result<&SumoPlacement> {
        self.0.get(&sumo).ok_or(Error::UnknownSumo(sumo))
    }

    /// Check every row refers to a known module before doing any work
    pub fn validate_rows(&self, rows: &[LookupRow]) -> Result<()> {
        match rows.iter().find(|row| !self.0.contains_key(&row.sumo)) {
            Some(row) => Err(Error::UnknownSumo(row.sumo)),
            None => Ok(()),
        }
    }

    /// Module numbers with a placement, in ascending order
    pub fn sumos(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.keys().copied()
    }

    /// Number of modules in the table
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the table holds no modules
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SumoTable {
    /// DREAM end-cap modules 3 to 6 (mm and degrees)
    fn default() -> Self {
        // values are approximate pending confirmation from the detector group
        let entries = [
            (3, 10.0, [0.0, 410.0, -1300.0]),
            (4, 17.0, [0.0, 590.0, -1310.0]),
            (5, 23.0, [0.0, 780.0, -1325.0]),
            (6, 29.0, [0.0, 1000.0, -1350.0]),
        ];

        Self(
            entries
                .into_iter()
                .map(|(sumo, angle, translation)| {
                    let placement = SumoPlacement {
                        angle,
                        translation: Vector3::from(translation),
                    };
                    (sumo, placement)
                })
                .collect(),
        )
    }
}

impl TryFrom<Vec<SumoEntry>> for SumoTable {
    type Error = Error;

    fn try_from(entries: Vec<SumoEntry>) -> Result<Self> {
        Self::from_entries(entries)
    }
}

impl From<SumoTable> for Vec<SumoEntry> {
    fn from(table: SumoTable) -> Self {
        table
            .0
            .into_iter()
            .map(|(sumo, placement)| SumoEntry {
                sumo,
                angle: placement.angle,
                translation: placement.translation.into(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_modules() {
        let table = SumoTable::default();
        assert_eq!(table.sumos().collect::<Vec<u32>>(), vec![3, 4, 5, 6]);
        assert_eq!(
            table.get(6).unwrap().translation,
            Vector3::new(0.0, 1000.0, -1350.0)
        );
    }

    #[test]
    fn duplicate_entries() {
        let entry = SumoEntry {
            sumo: 3,
            angle: 1.0,
            translation: [0.0; 3],
        };
        assert!(matches!(
            SumoTable::from_entries([entry, entry]),
            Err(Error::DuplicateSumo(3))
        ));
    }

    #[test]
    fn validate_rows_finds_unknown() {
        let rows = [
            LookupRow {
                sumo: 3,
                ..Default::default()
            },
            LookupRow {
                sumo: 9,
                ..Default::default()
            },
        ];
        assert!(matches!(
            SumoTable::default().validate_rows(&rows),
            Err(Error::UnknownSumo(9))
        ));
        assert!(SumoTable::default().validate_rows(&rows[..1]).is_ok());
    }

    #[test]
    fn json_entries() {
        let json = r#"[{"sumo": 3, "angle": 10.0, "translation": [0.0, 410.0, -1300.0]}]"#;
        let table: SumoTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(3).unwrap().angle, 10.0);

        let duplicated = r#"[
            {"sumo": 3, "angle": 10.0, "translation": [0.0, 0.0, 0.0]},
            {"sumo": 3, "angle": 11.0, "translation": [0.0, 0.0, 0.0]}
        ]"#;
        assert!(serde_json::from_str::<SumoTable>(duplicated).is_err());

        let back = serde_json::to_value(&table).unwrap();
        assert_eq!(back[0]["sumo"], 3);
    }
}
