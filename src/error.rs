//! Error types for the postcode rule engine.

use thiserror::Error;

use crate::validation::Rejection;

/// Errors raised by the formatting and parsing operations.
///
/// Validation itself never errors; it answers with a boolean or a
/// [`Rejection`]. The message of [`PostcodeError::InvalidPostcode`] is fixed
/// so callers can match on it; the rejecting rule is available through
/// [`std::error::Error::source`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PostcodeError {
    #[error("You need to pass a valid postcode")]
    InvalidPostcode {
        input: String,
        #[source]
        reason: Rejection,
    },
}

impl PostcodeError {
    pub fn invalid(input: impl Into<String>, reason: Rejection) -> Self {
        Self::InvalidPostcode {
            input: input.into(),
            reason,
        }
    }

    /// The rule that rejected the input
    pub fn reason(&self) -> &Rejection {
        match self {
            Self::InvalidPostcode { reason, .. } => reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, PostcodeError>;
