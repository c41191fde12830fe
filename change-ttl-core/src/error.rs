//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Message shown when a submitted value is not a number in `[1, 255]`.
pub const INVALID_TTL_MESSAGE: &str =
    "Invalid TTL value. Please enter a number between 1 and 255.";

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum TtlError {
    /// Local validation error, raised before any backend call
    #[error("Invalid TTL value. Please enter a number between 1 and 255.")]
    InvalidValue,

    /// A previous submission has not completed yet
    #[error("A TTL update is already in progress")]
    Busy,

    /// Failure reported by the backend; displayed verbatim
    #[error("{0}")]
    Backend(String),
}

impl TtlError {
    /// Build a backend error from any displayable cause.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    /// Whether it is expected behavior (user input) rather than a system failure.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::InvalidValue | Self::Busy)
    }
}

/// Core layer Result type alias
pub type TtlResult<T> = std::result::Result<T, TtlError>;
