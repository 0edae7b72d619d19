//! Numeric policy shared by every quantity operation

use crate::{MeasureError, MeasureResult};

/// Decimal places kept on every produced quantity value
pub const DECIMAL_PLACES: i32 = 2;

const ROUND_FACTOR: f64 = 100.0;

/// Scaled magnitudes at or above 2^52 have no fractional part left to round
const EXACT_LIMIT: f64 = 4_503_599_627_370_496.0;

/// Round half-up to `DECIMAL_PLACES` (ties go toward positive infinity).
///
/// Non-finite input is returned unchanged, and so is any value too large
/// for the rounding to change it.
pub fn round_to_precision(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scaled = value * ROUND_FACTOR;
    if !scaled.is_finite() || scaled.abs() >= EXACT_LIMIT {
        return normalize_zero(value);
    }
    normalize_zero((scaled + 0.5).floor() / ROUND_FACTOR)
}

/// Map `-0.0` to `0.0` so equal values share one bit pattern.
pub fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

pub fn ensure_finite(value: f64, what: &'static str) -> MeasureResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MeasureError::NonFinite { what, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_two_places() {
        assert_eq!(round_to_precision(0.6666666), 0.67);
        assert_eq!(round_to_precision(1.5), 1.5);
        assert_eq!(round_to_precision(12.000000000000002), 12.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_to_precision(0.125), 0.13);
        // ties move toward positive infinity, including for negatives
        assert_eq!(round_to_precision(-0.125), -0.12);
    }

    #[test]
    fn test_round_normalizes_negative_zero() {
        let r = round_to_precision(-0.001);
        assert_eq!(r.to_bits(), 0.0_f64.to_bits());
    }

    #[test]
    fn test_round_keeps_large_values() {
        assert_eq!(round_to_precision(1e307), 1e307);
        assert_eq!(round_to_precision(-1.5e307), -1.5e307);
        assert_eq!(round_to_precision(f64::MAX), f64::MAX);
        assert_eq!(round_to_precision(1.0e14 + 0.25), 1.0e14 + 0.25);
        assert_ne!(round_to_precision(1e307), round_to_precision(1.5e307));
    }

    #[test]
    fn test_round_passes_non_finite() {
        assert!(round_to_precision(f64::INFINITY).is_infinite());
        assert!(round_to_precision(f64::NAN).is_nan());
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(f64::NAN, "test").unwrap_err();
        assert!(matches!(err, MeasureError::NonFinite { what: "test", .. }));
        assert_eq!(ensure_finite(2.5, "test").unwrap(), 2.5);
    }
}
