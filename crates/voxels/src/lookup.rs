//! Voxel lookup table rows and file reading

// standard library
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::parsers;
use crate::trap::TrapParameters;

// external crates
use log::{debug, info};
use nalgebra::Vector3;

/// One voxel from a detector lookup table
///
/// All lengths are full lengths, in the units of the table (mm for the DREAM
/// tables).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LookupRow {
    /// Module (sumo) number
    pub sumo: u32,
    /// Combined code, `sector * 100 + segment`
    pub sect_seg: u32,
    /// Strip number
    pub strip: u32,
    /// Wire number
    pub wire: u32,
    /// Counter number
    pub counter: u32,
    /// Voxel centre in the module frame
    pub centre: [f64; 3],
    /// Width in x of the face at -z
    pub x1: f64,
    /// Width in x of the face at +z
    pub x2: f64,
    /// Height in y of the face at +z
    pub y1: f64,
    /// Height in y of the face at -z
    pub y2: f64,
    /// Depth in z
    pub z: f64,
}

impl LookupRow {
    /// Sector number from the combined sector/segment code
    pub fn sector(&self) -> u32 {
        self.sect_seg / 100
    }

    /// Segment number from the combined sector/segment code
    pub fn segment(&self) -> u32 {
        self.sect_seg % 100
    }

    /// Voxel centre as a vector
    pub fn centre(&self) -> Vector3<f64> {
        Vector3::from(self.centre)
    }

    /// Shape of the voxel as a right trapezoid
    ///
    /// The table holds full lengths where the trapezoid wants half-lengths.
    /// Note that `y2` is the height of the face at -z, and `y1` of the face
    /// at +z.
    ///
    /// ```rust
    /// # use nxgeom_voxels::LookupRow;
    /// let row = LookupRow { x1: 4.0, x2: 6.0, y1: 8.0, y2: 10.0, z: 20.0, ..Default::default() };
    /// let trap = row.trap();
    /// assert_eq!((trap.dz, trap.dy1, trap.dy2), (10.0, 5.0, 4.0));
    /// assert_eq!((trap.dx1, trap.dx2, trap.dx3, trap.dx4), (2.0, 2.0, 3.0, 3.0));
    /// ```
    pub fn trap(&self) -> TrapParameters {
        TrapParameters::right(
            self.z / 2.0,
            self.y2 / 2.0,
            self.x1 / 2.0,
            self.y1 / 2.0,
            self.x2 / 2.0,
        )
    }
}

/// Read every voxel row from a lookup table file
///
/// ```rust, no_run
/// # use nxgeom_voxels::read_lookup_table;
/// let rows = read_lookup_table("LookupTableDreamEndCap_noRRT.txt").unwrap();
/// println!("{} voxels", rows.len());
/// ```
pub fn read_lookup_table<P: AsRef<Path>>(path: P) -> Result<Vec<LookupRow>> {
    info!("Reading {}", path.as_ref().display());
    let content = std::fs::read_to_string(path)?;
    parse_lookup_table(&content)
}

/// Parse lookup table rows from text
///
/// Rows are whitespace separated with 13 columns:
///
/// ```text
/// sumo sect-seg strip wire counter x_centre y_centre z_centre x1 x2 y1 y2 z
/// ```
///
/// Blank lines and lines starting with `#` are skipped. Any other line that
/// does not parse is an error with the 1-based line number.
pub fn parse_lookup_table(content: &str) -> Result<Vec<LookupRow>> {
    let mut rows = Vec::new();

    for (n, line) in content.lines().enumerate() {
        if parsers::is_ignored(line) {
            continue;
        }

        let (_, row) = parsers::lookup_row(line).map_err(|_| Error::InvalidRow {
            line: n + 1,
            content: line.to_string(),
        })?;
        rows.push(row);
    }

    debug!("Parsed {} lookup table rows", rows.len());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_and_segment() {
        let row = LookupRow {
            sect_seg: 1207,
            ..Default::default()
        };
        assert_eq!(row.sector(), 12);
        assert_eq!(row.segment(), 7);
    }

    #[test]
    fn comments_and_blank_lines() {
        let text = "# header\n\n3 101 1 1 0 0 0 0 1 1 1 1 1\n   \n4 102 1 1 1 0 0 0 1 1 1 1 1\n";
        let rows = parse_lookup_table(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].sumo, 4);
    }

    #[test]
    fn bad_row_line_number() {
        let text = "3 101 1 1 0 0 0 0 1 1 1 1 1\n\nnot a row\n";
        match parse_lookup_table(text) {
            Err(Error::InvalidRow { line, content }) => {
                assert_eq!(line, 3);
                assert_eq!(content, "not a row");
            }
            other => panic!("unexpected result {other:?}"),
        }
    }
}
