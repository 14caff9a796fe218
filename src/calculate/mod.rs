//! Statistics calculation engine.
//!
//! Computes derived metrics from player records:
//! - Per-player composite ("radar") scores and top attributes
//! - Team roster and lineup aggregates
//! - Position coverage and rating distributions
//!
//! Everything here is a pure transformation over in-memory data: no
//! I/O, no shared state, and a defined output for every input,
//! including empty bags and empty collections.

mod aggregate;
mod radar;

pub use aggregate::*;
pub use radar::*;

/// Mean of `values`, rounded to the nearest integer. Defined as 0 for
/// an empty slice so callers never see NaN.
pub(crate) fn rounded_mean(values: &[f64]) -> u32 {
    if values.is_empty() {
        0
    } else {
        (values.iter().sum::<f64>() / values.len() as f64).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_mean_empty() {
        assert_eq!(rounded_mean(&[]), 0);
    }

    #[test]
    fn test_rounded_mean_single() {
        assert_eq!(rounded_mean(&[87.0]), 87);
    }

    #[test]
    fn test_rounded_mean_rounds_to_nearest() {
        assert_eq!(rounded_mean(&[90.0, 80.0]), 85);
        assert_eq!(rounded_mean(&[80.0, 81.0]), 81); // 80.5 rounds up
        assert_eq!(rounded_mean(&[70.0, 70.0, 71.0]), 70); // 70.33 rounds down
    }
}
