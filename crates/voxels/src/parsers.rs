//! Library of parser functions

// crate modules
use crate::lookup::LookupRow;

// nom parser combinators
use nom::character::complete::{space0, space1, u32 as uint};
use nom::combinator::all_consuming;
use nom::number::complete::double;
use nom::sequence::{preceded, terminated, tuple};
use nom::IResult;

/// Check for blank lines or `#` comments, which carry no voxel data
pub fn is_ignored(i: &str) -> bool {
    let i = i.trim_start();
    i.is_empty() || i.starts_with('#')
}

/// Parse a full whitespace separated lookup table row into a [LookupRow]
///
/// ```text
/// sumo  sect-seg  strip  wire  counter  x_c  y_c  z_c  x1  x2  y1  y2  z
/// ```
pub fn lookup_row(i: &str) -> IResult<&str, LookupRow> {
    let (i, (sumo, sect_seg, strip, wire, counter)) = tuple((
        preceded(space0, uint),
        preceded(space1, uint),
        preceded(space1, uint),
        preceded(space1, uint),
        preceded(space1, uint),
    ))(i)?;

    let (i, (x_centre, y_centre, z_centre)) = tuple((
        preceded(space1, double),
        preceded(space1, double),
        preceded(space1, double),
    ))(i)?;

    let (i, (x1, x2, y1, y2, z)) = all_consuming(terminated(
        tuple((
            preceded(space1, double),
            preceded(space1, double),
            preceded(space1, double),
            preceded(space1, double),
            preceded(space1, double),
        )),
        space0,
    ))(i)?;

    Ok((
        i,
        LookupRow {
            sumo,
            sect_seg,
            strip,
            wire,
            counter,
            centre: [x_centre, y_centre, z_centre],
            x1,
            x2,
            y1,
            y2,
            z,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_row() {
        let (_, row) = lookup_row("3  612 1 1 0  -12.5 240.0 1.5e2  10.0 12.0 5.0 6.0 20.0").unwrap();
        assert_eq!(row.sumo, 3);
        assert_eq!(row.sect_seg, 612);
        assert_eq!(row.counter, 0);
        assert_eq!(row.centre, [-12.5, 240.0, 150.0]);
        assert_eq!([row.x1, row.x2, row.y1, row.y2, row.z], [10.0, 12.0, 5.0, 6.0, 20.0]);
    }

    #[test]
    fn tabs_and_trailing_space() {
        assert!(lookup_row("\t4\t101\t2\t3\t1\t0\t0\t0\t1\t1\t1\t1\t1\t ").is_ok());
    }

    #[test]
    fn rejects_short_and_long_rows() {
        assert!(lookup_row("3 612 1 1 0 0 0 0 1 1 1 1").is_err());
        assert!(lookup_row("3 612 1 1 0 0 0 0 1 1 1 1 1 1").is_err());
    }

    #[test]
    fn rejects_fractional_codes() {
        assert!(lookup_row("3.0 612 1 1 0 0 0 0 1 1 1 1 1").is_err());
    }

    #[test]
    fn ignored_lines() {
        assert!(is_ignored(""));
        assert!(is_ignored("  # sumo sect-seg strip ..."));
        assert!(!is_ignored("3 612 1 1 0 0 0 0 1 1 1 1 1"));
    }
}
