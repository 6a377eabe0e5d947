//! Domain error model.

use thiserror::Error;

/// Result type used across the feed model and builder.
pub type FeedResult<T> = Result<T, FeedError>;

/// Feed-level error.
///
/// Every failure is raised synchronously to the caller of the setter or of
/// `build()`; nothing is retried or downgraded to a warning.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// A value of the wrong shape was assigned to a composite-typed field.
    #[error("type mismatch: {field} expects {expected}, got {found}")]
    TypeMismatch {
        field: String,
        expected: String,
        found: String,
    },

    /// A structural rule was violated (missing or duplicate id, capacity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A value could not be represented in the output format.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl FeedError {
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
