/// Scientific notation with a signed, zero padded exponent
///
/// Rust drops the sign and padding from positive exponents (`1.27e-2` but
/// `1.1e0`), which makes columns of coordinates hard to line up. This always
/// writes two exponent digits with an explicit sign.
///
/// ```rust
/// # use nxgeom_utils::SciFormat;
/// assert_eq!((-1.0f64).sci(5), "-1.00000e+00");
/// assert_eq!(0.0127f64.sci(3), "1.270e-02");
/// assert_eq!(f64::NAN.sci(3), "NaN");
/// ```
pub trait SciFormat {
    /// Format with `precision` digits after the decimal point
    fn sci(&self, precision: usize) -> String;
}

impl SciFormat for f64 {
    fn sci(&self, precision: usize) -> String {
        let text = format!("{self:.precision$e}");
        match text.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{mantissa}e{sign}{digits:0>2}")
            }
            // inf and NaN have no exponent
            None => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponent_padding() {
        assert_eq!(0f64.sci(2), "0.00e+00");
        assert_eq!(1.1e-12f64.sci(1), "1.1e-12");
        assert_eq!(6.02e23f64.sci(2), "6.02e+23");
        assert_eq!(1e100f64.sci(0), "1e+100");
    }

    #[test]
    fn non_finite() {
        assert_eq!(f64::INFINITY.sci(4), "inf");
        assert_eq!(f64::NEG_INFINITY.sci(4), "-inf");
    }
}
