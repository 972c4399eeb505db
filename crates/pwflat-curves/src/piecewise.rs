//! Owned piecewise-flat curve container.
//!
//! A [`PiecewiseFlatCurve`] starts empty and grows only by appending knots
//! with strictly increasing times; there is no removal or in-place mutation.
//! Readers needing a concurrent writer should build a fresh curve and swap it
//! in, which the `&mut self` receiver on [`PiecewiseFlatCurve::push`] makes
//! the natural shape anyway.

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::curve::ForwardCurve;
use crate::error::{CurveError, CurveResult};

/// An owned, append-only, time-ordered sequence of (time, rate) knots.
///
/// The container exclusively owns its backing storage and exposes read-only
/// views through the [`ForwardCurve`] capability set, so everything the
/// evaluator can do to raw arrays it can do to this type.
///
/// Deserialization goes through the same validation as [`from_knots`], so a
/// curve read back from JSON upholds the same invariants as one built in
/// code.
///
/// [`from_knots`]: PiecewiseFlatCurve::from_knots
///
/// # Example
///
/// ```rust
/// use pwflat_curves::{CurveResult, ForwardCurve, PiecewiseFlatCurve};
///
/// # fn main() -> CurveResult<()> {
/// let curve = PiecewiseFlatCurve::from_knots(
///     vec![1.0, 2.0, 3.0],
///     vec![0.1, 0.2, 0.3],
/// )?;
///
/// assert_eq!(curve.len(), 3);
/// assert_eq!(curve.forward(1.5, None), 0.2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawKnots<F>")]
#[serde(bound(
    serialize = "F: Serialize",
    deserialize = "F: serde::Deserialize<'de> + num_traits::Float"
))]
pub struct PiecewiseFlatCurve<F = f64> {
    times: Vec<F>,
    rates: Vec<F>,
}

/// Unvalidated wire form; promoted to a curve via `TryFrom`.
#[derive(Deserialize)]
struct RawKnots<F> {
    times: Vec<F>,
    rates: Vec<F>,
}

impl<F: Float> TryFrom<RawKnots<F>> for PiecewiseFlatCurve<F> {
    type Error = CurveError;

    fn try_from(raw: RawKnots<F>) -> CurveResult<Self> {
        Self::from_knots(raw.times, raw.rates)
    }
}

impl<F: Float> PiecewiseFlatCurve<F> {
    /// Creates an empty curve (zero knots).
    #[must_use]
    pub fn new() -> Self {
        Self {
            times: Vec::new(),
            rates: Vec::new(),
        }
    }

    /// Bulk-loads a curve from equal-length knot time and rate sequences.
    ///
    /// # Errors
    ///
    /// Returns an error if the sequences differ in length, any knot time is
    /// non-finite, or the knot times are not strictly increasing.
    pub fn from_knots(times: Vec<F>, rates: Vec<F>) -> CurveResult<Self> {
        if times.len() != rates.len() {
            return Err(CurveError::length_mismatch(times.len(), rates.len()));
        }
        for (i, &t) in times.iter().enumerate() {
            if !t.is_finite() {
                return Err(CurveError::non_finite_knot_time(i));
            }
        }
        if let Some(i) = (1..times.len()).find(|&i| times[i] <= times[i - 1]) {
            return Err(CurveError::knots_out_of_order(i, times[i - 1], times[i]));
        }
        debug_assert!(pwflat_math::strictly_increasing(&times));

        Ok(Self { times, rates })
    }

    /// Builds a curve by appending knots from an iterator of (time, rate)
    /// pairs, with the same invariants as [`push`](Self::push).
    pub fn from_pairs(pairs: impl IntoIterator<Item = (F, F)>) -> CurveResult<Self> {
        let mut curve = Self::new();
        for (time, rate) in pairs {
            curve.push(time, rate)?;
        }
        Ok(curve)
    }

    /// Appends a knot whose time strictly exceeds the current last knot time.
    ///
    /// O(1) amortized. Returns `&mut Self` so appends chain:
    ///
    /// ```rust
    /// # use pwflat_curves::PiecewiseFlatCurve;
    /// let mut curve = PiecewiseFlatCurve::new();
    /// curve.push(1.0, 0.04)?.push(2.0, 0.05)?;
    /// # Ok::<(), pwflat_curves::CurveError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if `time` is non-finite, or if the curve is non-empty
    /// and `time` does not strictly exceed the last knot time.
    pub fn push(&mut self, time: F, rate: F) -> CurveResult<&mut Self> {
        if !time.is_finite() {
            return Err(CurveError::non_finite_knot_time(self.times.len()));
        }
        if let Some(&last) = self.times.last() {
            if time <= last {
                return Err(CurveError::knot_not_after_last(last, time));
            }
        }

        self.times.push(time);
        self.rates.push(rate);

        Ok(self)
    }

    /// Appends a (time, rate) pair. See [`push`](Self::push).
    pub fn push_knot(&mut self, knot: (F, F)) -> CurveResult<&mut Self> {
        self.push(knot.0, knot.1)
    }

    /// The last knot as a (time, rate) pair, or `None` for an empty curve.
    pub fn last_knot(&self) -> Option<(F, F)> {
        match (self.times.last(), self.rates.last()) {
            (Some(&t), Some(&f)) => Some((t, f)),
            _ => None,
        }
    }

    /// Iterates over the knots in time order.
    pub fn knots(&self) -> impl Iterator<Item = (F, F)> + '_ {
        self.times
            .iter()
            .copied()
            .zip(self.rates.iter().copied())
    }
}

impl<F: Float> Default for PiecewiseFlatCurve<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> ForwardCurve<F> for PiecewiseFlatCurve<F> {
    fn len(&self) -> usize {
        self.times.len()
    }

    fn times(&self) -> &[F] {
        &self.times
    }

    fn rates(&self) -> &[F] {
        &self.rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_curve() -> PiecewiseFlatCurve {
        PiecewiseFlatCurve::from_knots(vec![1.0, 2.0, 3.0], vec![0.1, 0.2, 0.3]).unwrap()
    }

    #[test]
    fn test_empty_curve() {
        let curve: PiecewiseFlatCurve = PiecewiseFlatCurve::new();
        assert_eq!(curve.len(), 0);
        assert!(curve.is_empty());
        assert_eq!(curve.last_knot(), None);
        assert!(curve.forward(1.0, None).is_nan());
        assert_eq!(curve.forward(1.0, Some(0.2)), 0.2);
    }

    #[test]
    fn test_from_knots_validation() {
        // Mismatched lengths
        let result = PiecewiseFlatCurve::from_knots(vec![1.0, 2.0], vec![0.1]);
        assert_eq!(result.unwrap_err(), CurveError::length_mismatch(2, 1));

        // Non-monotonic times
        let result = PiecewiseFlatCurve::from_knots(vec![1.0, 0.5, 2.0], vec![0.1, 0.2, 0.3]);
        assert!(matches!(
            result.unwrap_err(),
            CurveError::KnotsOutOfOrder { index: 1, .. }
        ));

        // Tied times are also out of order
        let result = PiecewiseFlatCurve::from_knots(vec![1.0, 1.0], vec![0.1, 0.2]);
        assert!(matches!(
            result.unwrap_err(),
            CurveError::KnotsOutOfOrder { index: 1, .. }
        ));

        // NaN knot time
        let result = PiecewiseFlatCurve::from_knots(vec![1.0, f64::NAN], vec![0.1, 0.2]);
        assert_eq!(result.unwrap_err(), CurveError::non_finite_knot_time(1));
    }

    #[test]
    fn test_out_of_order_error_reports_offending_pair() {
        // The first violation is the one reported, with its index and values
        let result =
            PiecewiseFlatCurve::from_knots(vec![1.0, 2.0, 1.5, 0.5], vec![0.1, 0.2, 0.3, 0.4]);
        assert_eq!(
            result.unwrap_err(),
            CurveError::KnotsOutOfOrder {
                index: 2,
                prev: 2.0,
                current: 1.5,
            }
        );
    }

    #[test]
    fn test_push_grows_in_order() {
        let mut curve = PiecewiseFlatCurve::new();
        curve.push(1.0, 0.1).unwrap();
        assert_eq!(curve.len(), 1);
        curve.push(2.0, 0.2).unwrap();
        assert_eq!(curve.len(), 2);
        assert_eq!(curve.last_knot(), Some((2.0, 0.2)));
    }

    #[test]
    fn test_push_rejects_non_increasing_time() {
        let mut curve = sample_curve();

        // Equal to last
        let err = curve.push(3.0, 0.4).unwrap_err();
        assert_eq!(err, CurveError::knot_not_after_last(3.0, 3.0));

        // Before last
        assert!(curve.push(2.5, 0.4).is_err());

        // Size unchanged by failed appends
        assert_eq!(curve.len(), 3);

        // Strictly after last succeeds
        curve.push(3.5, 0.4).unwrap();
        assert_eq!(curve.len(), 4);
    }

    #[test]
    fn test_push_rejects_non_finite_time() {
        let mut curve = PiecewiseFlatCurve::new();
        assert!(curve.push(f64::NAN, 0.1).is_err());
        assert!(curve.push(f64::INFINITY, 0.1).is_err());
        assert!(curve.is_empty());
    }

    #[test]
    fn test_from_pairs() {
        let curve = PiecewiseFlatCurve::from_pairs([(1.0, 0.1), (2.0, 0.2)]).unwrap();
        assert_eq!(curve.times(), &[1.0, 2.0]);
        assert_eq!(curve.rates(), &[0.1, 0.2]);

        assert!(PiecewiseFlatCurve::from_pairs([(2.0, 0.1), (1.0, 0.2)]).is_err());
    }

    #[test]
    fn test_knots_iterator() {
        let curve = sample_curve();
        let knots: Vec<_> = curve.knots().collect();
        assert_eq!(knots, vec![(1.0, 0.1), (2.0, 0.2), (3.0, 0.3)]);
    }

    #[test]
    fn test_evaluation_through_trait() {
        let curve = sample_curve();
        assert_eq!(curve.forward(1.0, None), 0.1);
        assert_eq!(curve.forward(1.5, None), 0.2);
        assert_eq!(curve.forward(3.0, None), 0.3);
        assert_eq!(curve.forward(3.5, Some(0.0)), 0.0);
        assert_relative_eq!(curve.integral(1.5, None), 0.2, epsilon = 1e-15);
        assert_eq!(curve.discount(1.0, None), (-0.1f64).exp());
        assert_relative_eq!(curve.spot(2.0, None), 0.15, epsilon = 1e-15);
    }

    #[test]
    fn test_bulk_load_and_incremental_agree() {
        let bulk = sample_curve();
        let mut incremental = PiecewiseFlatCurve::new();
        incremental
            .push(1.0, 0.1)
            .unwrap()
            .push(2.0, 0.2)
            .unwrap()
            .push(3.0, 0.3)
            .unwrap();
        assert_eq!(bulk, incremental);
        for u in [0.0, 0.5, 1.0, 2.7, 3.0] {
            assert_eq!(bulk.discount(u, None), incremental.discount(u, None));
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let curve = sample_curve();
        let json = serde_json::to_string(&curve).unwrap();
        let back: PiecewiseFlatCurve = serde_json::from_str(&json).unwrap();
        assert_eq!(curve, back);
    }

    #[test]
    fn test_deserialization_validates_invariants() {
        // Out-of-order knots must not deserialize
        let json = r#"{"times":[2.0,1.0],"rates":[0.1,0.2]}"#;
        assert!(serde_json::from_str::<PiecewiseFlatCurve>(json).is_err());

        // Mismatched lengths must not deserialize
        let json = r#"{"times":[1.0,2.0],"rates":[0.1]}"#;
        assert!(serde_json::from_str::<PiecewiseFlatCurve>(json).is_err());
    }

    #[test]
    fn test_f32_curve() {
        let curve: PiecewiseFlatCurve<f32> =
            PiecewiseFlatCurve::from_knots(vec![1.0, 2.0], vec![0.1, 0.2]).unwrap();
        assert_eq!(curve.forward(1.5f32, None), 0.2);
    }
}
