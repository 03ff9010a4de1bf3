/// Evenly spaced samples over a closed interval
///
/// Returns `n` values from `start` to `stop` inclusive. A single sample is
/// just `start`, and zero samples is an empty vector.
///
/// The final value is set to `stop` exactly rather than accumulated, so the
/// upper bound is never off by a rounding error.
///
/// ```rust
/// # use nxgeom_utils::linspace;
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
/// assert!(linspace(2.0, 3.0, 0).is_empty());
/// ```
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values = (0..n)
                .map(|i| start + step * i as f64)
                .collect::<Vec<f64>>();
            values[n - 1] = stop;
            values
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descending_interval() {
        assert_eq!(linspace(1.0, -1.0, 3), vec![1.0, 0.0, -1.0]);
    }

    #[test]
    fn degenerate_interval() {
        assert_eq!(linspace(0.5, 0.5, 4), vec![0.5; 4]);
    }

    #[test]
    fn endpoint_is_exact() {
        let values = linspace(0.0, 0.7, 8);
        assert_eq!(values.len(), 8);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[7], 0.7);
    }
}
