//! Error types for curve construction.
//!
//! Only structural invariant violations are reported as errors: mismatched
//! knot array lengths, out-of-order knot times, and non-finite knot times.
//! They are programming errors at the call site — propagate them, do not
//! try to recover into a partially built curve. Out-of-domain evaluation is
//! not an error anywhere in this workspace; it yields NaN.

use num_traits::ToPrimitive;
use thiserror::Error;

/// A specialized Result type for curve construction.
pub type CurveResult<T> = Result<T, CurveError>;

/// Structural invariant violations on curve construction and append.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Knot times and rates sequences differ in length.
    #[error("Length mismatch: {times} knot times vs {rates} rates")]
    LengthMismatch {
        /// Number of knot times provided.
        times: usize,
        /// Number of rates provided.
        rates: usize,
    },

    /// Knot times are not strictly increasing.
    #[error("Knots out of order at index {index}: {prev:.6} >= {current:.6}")]
    KnotsOutOfOrder {
        /// Index where the strict-increase invariant fails.
        index: usize,
        /// Previous knot time.
        prev: f64,
        /// Offending knot time.
        current: f64,
    },

    /// Appended knot time does not strictly exceed the last knot time.
    #[error("Appended knot time {new:.6} does not exceed last knot time {last:.6}")]
    KnotNotAfterLast {
        /// Current last knot time.
        last: f64,
        /// Rejected knot time.
        new: f64,
    },

    /// Knot time is NaN or infinite.
    #[error("Non-finite knot time at index {index}")]
    NonFiniteKnotTime {
        /// Index of the non-finite knot time.
        index: usize,
    },
}

impl CurveError {
    /// Creates a length mismatch error.
    #[must_use]
    pub fn length_mismatch(times: usize, rates: usize) -> Self {
        Self::LengthMismatch { times, rates }
    }

    /// Creates a knots out of order error.
    #[must_use]
    pub fn knots_out_of_order(
        index: usize,
        prev: impl ToPrimitive,
        current: impl ToPrimitive,
    ) -> Self {
        Self::KnotsOutOfOrder {
            index,
            prev: prev.to_f64().unwrap_or(f64::NAN),
            current: current.to_f64().unwrap_or(f64::NAN),
        }
    }

    /// Creates a knot not after last error.
    #[must_use]
    pub fn knot_not_after_last(last: impl ToPrimitive, new: impl ToPrimitive) -> Self {
        Self::KnotNotAfterLast {
            last: last.to_f64().unwrap_or(f64::NAN),
            new: new.to_f64().unwrap_or(f64::NAN),
        }
    }

    /// Creates a non-finite knot time error.
    #[must_use]
    pub fn non_finite_knot_time(index: usize) -> Self {
        Self::NonFiniteKnotTime { index }
    }
}
