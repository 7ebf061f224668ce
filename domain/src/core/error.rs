//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid reference pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },
}

impl DomainError {
    /// Build a validation error for a single draft field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DomainError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this error was raised by draft validation
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation { .. })
    }
}
