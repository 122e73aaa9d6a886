//! Numeric helpers like sum(), mean(), round_to()
//!
//! All helpers are total over empty input: sums are `0.0`, means are `None`.

pub fn sum(vec: &[f64]) -> f64 {
    vec.iter().sum()
}

/// Arithmetic mean, or `None` if `vec` is empty.
pub fn mean(vec: &[f64]) -> Option<f64> {
    if vec.is_empty() {
        return None;
    }
    Some(sum(vec) / vec.len() as f64)
}

/// Rounds `x` to `decimals` digits after the decimal point.
pub fn round_to(x: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (x * factor).round() / factor
}

/// Percentage share of `part` in `whole`, or `None` when `whole` is zero.
pub fn share_pct(part: f64, whole: f64) -> Option<f64> {
    if whole == 0.0 {
        return None;
    }
    Some(part / whole * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum() {
        assert_eq!(sum(&[1.0, 3.0, 2.0]), 6.0);
        assert_eq!(sum(&[]), 0.0);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 3.0, 2.0]), Some(2.0));
        assert_eq!(mean(&[42.0]), Some(42.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_round_to() {
        assert!((round_to(1.23456, 2) - 1.23).abs() < 1e-12);
        assert!((round_to(1.235001, 2) - 1.24).abs() < 1e-12);
        assert!((round_to(47.96, 1) - 48.0).abs() < 1e-12);
        assert_eq!(round_to(5.0, 0), 5.0);
    }

    #[test]
    fn test_share_pct() {
        assert_eq!(share_pct(25.0, 100.0), Some(25.0));
        assert_eq!(share_pct(1.0, 0.0), None);
    }
}
