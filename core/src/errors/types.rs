//! Field-level validation errors

use serde_json::json;
use thiserror::Error;

/// Validation errors
///
/// These errors represent input validation failures tied to a named field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Out of range: {field} (min: {min}, max: {max})")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::RequiredField {
            field: field.into(),
        }
    }

    pub fn out_of_range(field: impl Into<String>, min: impl ToString, max: impl ToString) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    pub fn field(&self) -> &str {
        match self {
            ValidationError::RequiredField { field }
            | ValidationError::InvalidFormat { field }
            | ValidationError::OutOfRange { field, .. } => field,
        }
    }

    /// Structured details for API responses
    pub fn details(&self) -> serde_json::Value {
        match self {
            ValidationError::OutOfRange { field, min, max } => {
                json!({ "field": field, "min": min, "max": max })
            }
            other => json!({ "field": other.field() }),
        }
    }
}
