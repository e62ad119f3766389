// Floating-point comparison helpers shared by the simplifying constructors.
// Direct equality would miss values like 1.0/3.0 * 3.0.

/// Tolerance for treating a float as an exact small integer
pub(crate) const FLOAT_TOLERANCE: f64 = 1e-10;

/// Check if a float is approximately zero (within tolerance)
#[inline]
pub(crate) fn is_zero(n: f64) -> bool {
    n.abs() < FLOAT_TOLERANCE
}

/// Check if a float is approximately one (within tolerance)
#[inline]
pub(crate) fn is_one(n: f64) -> bool {
    (n - 1.0).abs() < FLOAT_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_zero() {
        assert!(is_zero(0.0));
        assert!(is_zero(1e-11));
        assert!(is_zero(-1e-11));
        assert!(!is_zero(0.1));
    }

    #[test]
    fn test_is_one() {
        assert!(is_one(1.0));
        assert!(is_one(1.0 + 1e-11));
        assert!(!is_one(1.1));
        assert!(!is_one(0.9));
    }
}
