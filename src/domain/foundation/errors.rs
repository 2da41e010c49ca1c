//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be a finite number, got {actual}")]
    NotFinite { field: String, actual: f64 },

    #[error("Range '{field}' must satisfy min < max, got [{min}, {max})")]
    InvalidRange { field: String, min: f64, max: f64 },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a non-finite number validation error.
    pub fn not_finite(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::NotFinite {
            field: field.into(),
            actual,
        }
    }

    /// Creates an inverted or empty range validation error.
    pub fn invalid_range(field: impl Into<String>, min: f64, max: f64) -> Self {
        ValidationError::InvalidRange {
            field: field.into(),
            min,
            max,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
