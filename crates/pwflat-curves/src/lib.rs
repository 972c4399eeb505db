//! # Pwflat Curves
//!
//! Owned piecewise-flat forward curves and the capability trait consumed by
//! curve evaluation.
//!
//! This crate provides:
//!
//! - **Curve Trait**: [`ForwardCurve`] — the minimal {len, times, rates}
//!   capability set, with evaluation methods provided on top of it
//! - **Container**: [`PiecewiseFlatCurve`] — an owned, append-only,
//!   time-ordered knot sequence with fallible construction
//! - **Errors**: [`CurveError`] for structural invariant violations
//!
//! ## Quick Start
//!
//! ```rust
//! use pwflat_curves::{ForwardCurve, PiecewiseFlatCurve};
//!
//! let mut curve = PiecewiseFlatCurve::new();
//! curve.push(1.0, 0.04)?;
//! curve.push(2.0, 0.045)?;
//! curve.push(5.0, 0.05)?;
//!
//! let f = curve.forward(1.5, None);          // forward rate at 1.5y
//! let df = curve.discount(2.0, None);        // discount factor
//! let z = curve.spot(4.0, None);             // zero rate
//! # Ok::<(), pwflat_curves::CurveError>(())
//! ```
//!
//! Out-of-domain queries (negative time, or beyond the last knot with no
//! extrapolation rate) return NaN rather than an error; only construction
//! and appending are fallible.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]

pub mod curve;
pub mod error;
pub mod piecewise;

pub use curve::ForwardCurve;
pub use error::{CurveError, CurveResult};
pub use piecewise::PiecewiseFlatCurve;
