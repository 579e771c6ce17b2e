use itertools::{Itertools, MinMaxResult};
use statrs::statistics::Statistics;

/// Arithmetic mean. Empty input is defined as 0.0 rather than NaN.
pub(crate) fn mean_or_zero(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().mean()
}

/// (min, max) of a slice, or None when empty.
pub(crate) fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    match values.iter().copied().minmax_by(|a, b| a.total_cmp(b)) {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some((v, v)),
        MinMaxResult::MinMax(lo, hi) => Some((lo, hi)),
    }
}

/// Pad a (min, max) range by `pct` of its span on both sides.
/// A flat range gets padded by `pct` of its magnitude so the line isn't glued to an edge.
pub(crate) fn padded_range(min: f64, max: f64, pct: f64) -> (f64, f64) {
    let span = max - min;
    let pad = if span > 0.0 {
        span * pct
    } else {
        (min.abs() * pct).max(1.0)
    };
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean_or_zero(&[]), 0.0);
    }

    #[test]
    fn mean_of_two() {
        assert_eq!(mean_or_zero(&[10.0, 20.0]), 15.0);
    }

    #[test]
    fn mean_of_single_value() {
        assert_eq!(mean_or_zero(&[42.5]), 42.5);
    }

    #[test]
    fn min_max_cases() {
        assert_eq!(min_max(&[]), None);
        assert_eq!(min_max(&[3.0]), Some((3.0, 3.0)));
        assert_eq!(min_max(&[3.0, -1.0, 7.5, 2.0]), Some((-1.0, 7.5)));
    }

    #[test]
    fn padded_range_widens_both_sides() {
        let (lo, hi) = padded_range(10.0, 20.0, 0.1);
        assert!((lo - 9.0).abs() < 1e-9);
        assert!((hi - 21.0).abs() < 1e-9);
    }

    #[test]
    fn padded_range_handles_flat_series() {
        let (lo, hi) = padded_range(100.0, 100.0, 0.05);
        assert!(lo < 100.0 && hi > 100.0);
    }
}
