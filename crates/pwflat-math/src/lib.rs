//! # Pwflat Math
//!
//! Evaluation primitives for piecewise-flat forward rate curves.
//!
//! This crate provides:
//!
//! - **Monotonicity**: strict-increase validation for knot time sequences
//! - **Evaluation**: point value, cumulative integral, discount factor, and
//!   spot rate for a curve given as raw knot arrays
//!
//! ## Design Philosophy
//!
//! - **NaN, not errors**: out-of-domain queries yield a quiet NaN that
//!   propagates through downstream aggregates, so batch evaluation needs no
//!   per-call branching
//! - **Preconditions, not checks**: the evaluator assumes strictly increasing
//!   knot times; validation belongs at construction time
//! - **Generic**: works with any `num_traits::Float` scalar

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]

pub mod forward;
pub mod monotonic;

pub use forward::{discount, integral, spot, value};
pub use monotonic::strictly_increasing;
