//! Core forward curve trait.
//!
//! [`ForwardCurve`] is the capability set consumed by curve evaluation:
//! a knot count plus read-only views of the knot times and rates. Any type
//! that exposes those three accessors gets the full evaluator — point value,
//! integral, discount factor, spot rate — as provided methods, independent of
//! how the knots are stored.
//!
//! # Design Philosophy
//!
//! The trait is intentionally minimal: storage strategy belongs to the
//! implementor, the numerics live in `pwflat-math`, and the provided methods
//! are thin delegations. This reproduces an interface/implementation split
//! without dynamic dispatch; blanket impls for `&C`, `Box<C>`, and `Arc<C>`
//! cover the common ownership shapes.
//!
//! # Thread Safety
//!
//! Evaluation takes `&self` and reads only; concurrent reads of a shared
//! curve need no coordination as long as no writer appends concurrently.

use std::sync::Arc;

use num_traits::Float;
use pwflat_math::forward;

/// Capability set for a piecewise-flat forward curve.
///
/// Invariant expected of implementors: `times()` and `rates()` have equal
/// length `len()` and the times are strictly increasing. The provided
/// evaluation methods assume it.
///
/// Every evaluation method takes the extrapolation rate per call; `None`
/// means the NaN sentinel, so queries beyond the last knot come back NaN.
///
/// # Example
///
/// ```rust
/// use pwflat_curves::ForwardCurve;
///
/// /// Borrowed knot arrays are a perfectly good curve.
/// struct KnotView<'a> {
///     times: &'a [f64],
///     rates: &'a [f64],
/// }
///
/// impl ForwardCurve<f64> for KnotView<'_> {
///     fn len(&self) -> usize {
///         self.times.len()
///     }
///     fn times(&self) -> &[f64] {
///         self.times
///     }
///     fn rates(&self) -> &[f64] {
///         self.rates
///     }
/// }
///
/// let view = KnotView { times: &[1.0, 2.0], rates: &[0.04, 0.05] };
/// assert_eq!(view.forward(1.5, None), 0.05);
/// ```
pub trait ForwardCurve<F: Float> {
    /// Number of knots.
    fn len(&self) -> usize;

    /// Knot times, strictly increasing.
    fn times(&self) -> &[F];

    /// Knot rates, one per knot time.
    fn rates(&self) -> &[F];

    // ========================================================================
    // Default implementations
    // ========================================================================

    /// Returns true if the curve has no knots.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The last knot time, or `None` for an empty curve.
    fn last_knot_time(&self) -> Option<F> {
        self.times().last().copied()
    }

    /// Forward rate at time `u`. See [`pwflat_math::forward::value`].
    fn forward(&self, u: F, extrap: Option<F>) -> F {
        forward::value(u, self.times(), self.rates(), extrap)
    }

    /// Cumulative integral of the forward rate from 0 to `u`.
    /// See [`pwflat_math::forward::integral`].
    fn integral(&self, u: F, extrap: Option<F>) -> F {
        forward::integral(u, self.times(), self.rates(), extrap)
    }

    /// Discount factor at time `u`. See [`pwflat_math::forward::discount`].
    fn discount(&self, u: F, extrap: Option<F>) -> F {
        forward::discount(u, self.times(), self.rates(), extrap)
    }

    /// Spot (zero) rate at time `u`. See [`pwflat_math::forward::spot`].
    fn spot(&self, u: F, extrap: Option<F>) -> F {
        forward::spot(u, self.times(), self.rates(), extrap)
    }
}

/// Blanket implementation allowing `&C` to be used as a `ForwardCurve`.
impl<F: Float, C: ForwardCurve<F> + ?Sized> ForwardCurve<F> for &C {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn times(&self) -> &[F] {
        (**self).times()
    }

    fn rates(&self) -> &[F] {
        (**self).rates()
    }
}

/// Blanket implementation allowing `Box<C>` to be used as a `ForwardCurve`.
impl<F: Float, C: ForwardCurve<F> + ?Sized> ForwardCurve<F> for Box<C> {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn times(&self) -> &[F] {
        (**self).times()
    }

    fn rates(&self) -> &[F] {
        (**self).rates()
    }
}

/// Blanket implementation allowing `Arc<C>` to be used as a `ForwardCurve`.
impl<F: Float, C: ForwardCurve<F> + ?Sized> ForwardCurve<F> for Arc<C> {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn times(&self) -> &[F] {
        (**self).times()
    }

    fn rates(&self) -> &[F] {
        (**self).rates()
    }
}
