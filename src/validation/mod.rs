//! Postcode Rule Engine
//!
//! Structural validation and area-specific exception rules.

pub mod engine;
pub mod rules;

pub use engine::{Rejection, check, format, validate};

pub(crate) use engine::check_normalized;
