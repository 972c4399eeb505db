//! Piecewise-flat forward curve evaluation.
//!
//! A forward curve is given as two equal-length arrays of knot times and knot
//! rates, plus an optional extrapolation rate for times beyond the last knot.
//! The curve is a right-continuous step function over left-open, right-closed
//! intervals:
//!
//! ```text
//! f(u) = rates[i]  if times[i-1] < u <= times[i]   (times[-1] == 0)
//!      = extrap    if u > times[n-1]
//! ```
//!
//! and NaN for `u < 0`. For an empty curve, `f(u) = extrap` for all `u >= 0`.
//!
//! # Mathematical Background
//!
//! The cumulative integral of the step function gives the discount factor
//!
//! ```text
//! D(u) = exp(-∫₀ᵘ f(t) dt)
//! ```
//!
//! and the spot (zero) rate is the average forward rate `∫₀ᵘ f(t) dt / u`.
//!
//! # Preconditions
//!
//! All functions assume `times` is strictly increasing (see
//! [`crate::monotonic::strictly_increasing`]) and that both slices have the
//! same length. Violating either yields a garbage result, not a panic in
//! release builds; validation belongs at curve construction.

use num_traits::Float;

/// Forward rate at time `u`.
///
/// Returns NaN for `u < 0`, the extrapolation rate for `u` beyond the last
/// knot (or for an empty curve), and otherwise the rate of the interval
/// containing `u`. A query exactly on a knot time returns that knot's rate.
///
/// `None` for `extrap` means no extrapolation rate was supplied, i.e. the
/// NaN sentinel.
///
/// O(log n) via binary search over the sorted knot times.
///
/// # Example
///
/// ```rust
/// use pwflat_math::forward::value;
///
/// let t = [1.0f64, 2.0, 3.0];
/// let f = [0.1, 0.2, 0.3];
///
/// assert_eq!(value(1.0, &t, &f, None), 0.1);
/// assert_eq!(value(1.5, &t, &f, None), 0.2);
/// assert_eq!(value(3.5, &t, &f, Some(0.0)), 0.0);
/// assert!(value(3.5, &t, &f, None).is_nan());
/// ```
pub fn value<F: Float>(u: F, times: &[F], rates: &[F], extrap: Option<F>) -> F {
    debug_assert_eq!(times.len(), rates.len());
    let extrap = extrap.unwrap_or_else(F::nan);

    if u < F::zero() {
        return F::nan();
    }
    if times.is_empty() {
        return extrap;
    }

    // Smallest index with times[i] >= u; the left-open/right-closed
    // convention means an exact knot hit returns that knot's rate.
    let i = times.partition_point(|&t| t < u);
    if i == times.len() {
        extrap
    } else {
        rates[i]
    }
}

/// Cumulative integral `∫₀ᵘ f(t) dt` of the forward curve.
///
/// Returns NaN for `u < 0`. Walks the knots left to right, accumulating
/// `rates[i] * (times[i] - prev)` for every knot with `times[i] <= u`, then
/// adds the final partial interval at the next knot's rate (inside the
/// curve) or the extrapolation rate (beyond it). The summation order is part
/// of the contract: `discount` reproduces it exactly.
///
/// A query landing exactly on a knot has a zero-width tail, which is
/// skipped; `integral(times[n-1], ..)` is therefore finite even when no
/// extrapolation rate is supplied.
///
/// # Example
///
/// ```rust
/// use pwflat_math::forward::integral;
///
/// let t = [1.0f64, 2.0, 3.0];
/// let f = [0.1, 0.2, 0.3];
///
/// assert_eq!(integral(0.0, &t, &f, None), 0.0);
/// assert_eq!(integral(0.5, &t, &f, None), 0.1 * 0.5);
/// assert_eq!(integral(1.5, &t, &f, None), 0.1 + 0.2 * 0.5);
/// ```
pub fn integral<F: Float>(u: F, times: &[F], rates: &[F], extrap: Option<F>) -> F {
    debug_assert_eq!(times.len(), rates.len());
    let extrap = extrap.unwrap_or_else(F::nan);

    if u < F::zero() || u.is_nan() {
        return F::nan();
    }

    let mut acc = F::zero();
    let mut prev = F::zero();
    let mut i = 0;
    while i < times.len() && times[i] <= u {
        acc = acc + rates[i] * (times[i] - prev);
        prev = times[i];
        i += 1;
    }
    if u > prev {
        let tail = if i < times.len() { rates[i] } else { extrap };
        acc = acc + tail * (u - prev);
    }

    acc
}

/// Discount factor `D(u) = exp(-∫₀ᵘ f(t) dt)`.
///
/// NaN from [`integral`] propagates unchanged (`exp(NaN) == NaN`).
pub fn discount<F: Float>(u: F, times: &[F], rates: &[F], extrap: Option<F>) -> F {
    (-integral(u, times, rates, extrap)).exp()
}

/// Spot (zero) rate: the average forward rate from 0 to `u`.
///
/// Returns `rates[0]` directly for `u <= times[0]`, avoiding the 0/0 at
/// `u ≈ 0`, and `integral(u) / u` beyond the first knot. On an empty curve
/// the spot rate is undefined and NaN is returned.
///
/// # Example
///
/// ```rust
/// use pwflat_math::forward::spot;
///
/// let t = [1.0f64, 2.0, 3.0];
/// let f = [0.1, 0.2, 0.3];
///
/// assert_eq!(spot(0.5, &t, &f, None), 0.1);
/// assert!((spot(2.0, &t, &f, None) - 0.15).abs() < 1e-15);
/// ```
pub fn spot<F: Float>(u: F, times: &[F], rates: &[F], extrap: Option<F>) -> F {
    debug_assert_eq!(times.len(), rates.len());

    if times.is_empty() {
        return F::nan();
    }
    if u <= times[0] {
        rates[0]
    } else {
        integral(u, times, rates, extrap) / u
    }
}
