//! Library of parser functions

// nom parser combinators
use nom::character::complete::{space0, space1, u32 as uint};
use nom::combinator::{all_consuming, map};
use nom::multi::count;
use nom::number::complete::double;
use nom::sequence::{delimited, preceded, terminated, tuple};
use nom::IResult;

/// Check for the `OFF` tag that opens every file
pub fn is_header(i: &str) -> bool {
    i.trim() == "OFF"
}

/// Check for blank lines or `#` comments, which carry no data
pub fn is_ignored(i: &str) -> bool {
    let i = i.trim_start();
    i.is_empty() || i.starts_with('#')
}

/// Parse the `<vertices> <faces> <edges>` counts line
pub fn counts(i: &str) -> IResult<&str, (usize, usize, usize)> {
    all_consuming(delimited(
        space0,
        tuple((usize_value, preceded(space1, usize_value), preceded(space1, usize_value))),
        space0,
    ))(i)
}

/// Parse a line of three coordinates
pub fn vertex(i: &str) -> IResult<&str, [f64; 3]> {
    all_consuming(delimited(
        space0,
        map(
            tuple((double, preceded(space1, double), preceded(space1, double))),
            |(x, y, z)| [x, y, z],
        ),
        space0,
    ))(i)
}

/// Parse a face line, a count followed by that many vertex indices
pub fn face(i: &str) -> IResult<&str, Vec<usize>> {
    let (i, n) = preceded(space0, usize_value)(i)?;
    all_consuming(terminated(count(preceded(space1, usize_value), n), space0))(i)
}

/// Unsigned integer as a usize
fn usize_value(i: &str) -> IResult<&str, usize> {
    map(uint, |v| v as usize)(i)
}
