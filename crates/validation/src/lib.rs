//! # Input Validator
//!
//! Turns a raw parameter set into a list of field-level violations, using the
//! bounds table from `configuration`.
//!
//! Every rule is evaluated independently and all violations are returned
//! together, so a caller can surface every problem at once. Validation failures
//! are data: these functions always return normally and never panic, whatever
//! the input.

pub mod clamp;
pub mod growth;
pub mod mortgage;
mod rules;

pub use clamp::{clamp_growth, clamp_mortgage};
pub use growth::{resolve_horizon, validate_growth};
pub use mortgage::{minimum_down_payment, validate_mortgage};
