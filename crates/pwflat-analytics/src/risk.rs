//! Parallel-shift sensitivities of present value.
//!
//! A uniform additive shift `s` applied to every forward rate scales each
//! discount factor by `exp(-s * t)`, so the first derivative of present
//! value with respect to `s` at `s = 0` is `-Σ t_j * c_j * D(t_j)`. The
//! partial variant restricts the shift to the region beyond the curve's
//! last knot, which is the sensitivity that matters when the knots are
//! observed and only the extrapolated tail is uncertain.

use num_traits::Float;
use pwflat_curves::ForwardCurve;

use crate::cashflow::CashFlow;

/// Derivative of present value with respect to a parallel shift of the
/// whole forward curve: `-Σ time_j * amount_j * D(time_j)`.
///
/// Same NaN-poisoning rule as [`present_value`](crate::present_value);
/// flows need not be time-ordered.
pub fn duration<F, C>(flows: &[CashFlow<F>], curve: &C, extrap: Option<F>) -> F
where
    F: Float,
    C: ForwardCurve<F>,
{
    let mut d = F::zero();
    for cf in flows {
        d = d - cf.time * cf.amount * curve.discount(cf.time, extrap);
    }
    d
}

/// Derivative of present value with respect to a parallel shift applied
/// only beyond the curve's last knot time `t_last`.
///
/// Only flows at or after `t_last` are exposed to that shift, each with
/// lever arm `time_j - t_last`:
///
/// ```text
/// -Σ_{time_j >= t_last} (time_j - t_last) * amount_j * D(time_j)
/// ```
///
/// The first affected flow is found by binary search, so unlike
/// [`duration`] this requires `flows` to be sorted ascending by time. For an
/// empty curve `t_last` is 0 and every flow contributes.
pub fn partial_duration<F, C>(flows: &[CashFlow<F>], curve: &C, extrap: Option<F>) -> F
where
    F: Float,
    C: ForwardCurve<F>,
{
    let t_last = curve.last_knot_time().unwrap_or_else(F::zero);
    let i0 = flows.partition_point(|cf| cf.time < t_last);

    let mut d = F::zero();
    for cf in &flows[i0..] {
        d = d - (cf.time - t_last) * cf.amount * curve.discount(cf.time, extrap);
    }
    d
}
