//! Discrete cash flow value type.

use serde::{Deserialize, Serialize};

/// A single cash flow: an amount paid at a point in time.
///
/// Valuation does not require flows to be ordered, but
/// [`partial_duration`](crate::risk::partial_duration) works on an
/// ascending-time sequence, which is the standard convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow<F = f64> {
    /// Payment time, in the same time units as the curve's knot times.
    pub time: F,
    /// Payment amount.
    pub amount: F,
}

impl<F> CashFlow<F> {
    /// Creates a cash flow of `amount` at `time`.
    pub fn new(time: F, amount: F) -> Self {
        Self { time, amount }
    }
}

impl<F> From<(F, F)> for CashFlow<F> {
    fn from((time, amount): (F, F)) -> Self {
        Self { time, amount }
    }
}
