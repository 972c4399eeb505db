//! Strict-increase validation for ordered sequences.
//!
//! Knot times of a piecewise-flat curve must be strictly increasing; the
//! evaluator in [`crate::forward`] treats that as an unchecked precondition,
//! so containers validate with this check before handing arrays over.

/// Returns true iff every consecutive pair of values is strictly increasing.
///
/// Vacuously true for sequences of length 0 or 1. Works over any partially
/// ordered scalar; note that a NaN anywhere in a float sequence fails the
/// check, since no comparison against NaN holds.
///
/// # Example
///
/// ```rust
/// use pwflat_math::strictly_increasing;
///
/// assert!(strictly_increasing(&[1.0, 2.0, 3.0]));
/// assert!(!strictly_increasing(&[1.0, 2.0, 2.0]));
/// ```
pub fn strictly_increasing<T: PartialOrd>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] < w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_singleton_are_increasing() {
        assert!(strictly_increasing::<f64>(&[]));
        assert!(strictly_increasing(&[42.0]));
    }

    #[test]
    fn test_strictly_increasing() {
        assert!(strictly_increasing(&[1.0, 2.0, 3.0]));
        assert!(strictly_increasing(&[0.1, 0.2, 0.3]));
        assert!(strictly_increasing(&[1u32, 2, 3]));
    }

    #[test]
    fn test_rejects_ties_and_decreases() {
        assert!(!strictly_increasing(&[1.0, 1.0]));
        assert!(!strictly_increasing(&[0.1, 0.2, -1.0]));
        // Reversed order of an increasing sequence
        assert!(!strictly_increasing(&[0.3, 0.2, 0.1]));
    }

    #[test]
    fn test_nan_fails() {
        assert!(!strictly_increasing(&[1.0, f64::NAN, 3.0]));
        assert!(!strictly_increasing(&[f64::NAN, f64::NAN]));
        // Single element is vacuously increasing, NaN or not
        assert!(strictly_increasing(&[f64::NAN]));
    }
}
