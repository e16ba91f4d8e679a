//! UK Postcode
//!
//! Validation and formatting of United Kingdom postcodes.
//!
//! This library provides:
//! - Structural validation plus the area and letter exception rules
//! - Canonical "OUTWARD INWARD" formatting
//! - A validated [`Postcode`] value type
//! - Configuration for the `postcode` command-line tool

pub mod config;
pub mod error;
pub mod postcode;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use error::PostcodeError;
pub use postcode::{Postcode, PostcodeParts, normalize};
pub use validation::{Rejection, check, format, validate};
