//! # Pwflat Analytics
//!
//! Valuation of discrete cash flow streams against a piecewise-flat forward
//! curve.
//!
//! This crate provides:
//!
//! - **Cash flows**: the [`CashFlow`] (time, amount) value type
//! - **Valuation**: [`present_value`] by composing the curve's discount
//!   factor per flow
//! - **Risk**: [`duration`] and [`partial_duration`], the sensitivities of
//!   present value to parallel shifts of the forward curve
//!
//! All functions are pure reductions over explicit inputs; an undefined
//! discount factor (NaN) for any flow poisons the whole aggregate, which is
//! deliberate — a silently partial valuation would be worse than an
//! explicitly undefined one.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod cashflow;
pub mod risk;
pub mod valuation;

pub use cashflow::CashFlow;
pub use risk::{duration, partial_duration};
pub use valuation::present_value;
