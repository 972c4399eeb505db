//! Present value of a cash flow stream.

use num_traits::Float;
use pwflat_curves::ForwardCurve;

use crate::cashflow::CashFlow;

/// Present value: `Σ amount_j * D(time_j)` over the curve's discount factor.
///
/// `extrap` is the extrapolation rate for flows beyond the curve's last
/// knot; with `None`, any such flow discounts to NaN and poisons the total,
/// per IEEE-754. Flows need not be time-ordered.
///
/// Linear in the flow amounts.
///
/// # Example
///
/// ```rust
/// use pwflat_analytics::{present_value, CashFlow};
/// use pwflat_curves::PiecewiseFlatCurve;
///
/// let curve = PiecewiseFlatCurve::from_knots(
///     vec![1.0, 2.0, 3.0],
///     vec![0.1, 0.2, 0.3],
/// )?;
/// let flows = [CashFlow::new(1.0, 100.0), CashFlow::new(2.0, 100.0)];
///
/// let pv = present_value(&flows, &curve, None);
/// assert!((pv - 100.0 * ((-0.1f64).exp() + (-0.3f64).exp())).abs() < 1e-10);
/// # Ok::<(), pwflat_curves::CurveError>(())
/// ```
pub fn present_value<F, C>(flows: &[CashFlow<F>], curve: &C, extrap: Option<F>) -> F
where
    F: Float,
    C: ForwardCurve<F>,
{
    let mut pv = F::zero();
    for cf in flows {
        pv = pv + cf.amount * curve.discount(cf.time, extrap);
    }
    pv
}
