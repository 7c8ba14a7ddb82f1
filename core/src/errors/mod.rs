//! Domain-specific error types and error handling.

mod types;


pub use types::ValidationError;

use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Core domain errors
///
/// Every variant maps onto one HTTP-style status class via [`DomainError::status_code`].
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    BusinessRule { message: String },

    #[error("Room is already booked")]
    BookingConflict { booking_id: Uuid },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("{message}")]
    Forbidden { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }

    pub fn business_rule(message: impl Into<String>) -> Self {
        DomainError::BusinessRule {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        DomainError::Forbidden {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    /// HTTP-style status classification
    pub fn status_code(&self) -> u16 {
        match self {
            DomainError::Validation { .. }
            | DomainError::BusinessRule { .. }
            | DomainError::BookingConflict { .. }
            | DomainError::ValidationErr(_) => 400,
            DomainError::Unauthorized => 401,
            DomainError::Forbidden { .. } => 403,
            DomainError::NotFound { .. } => 404,
            DomainError::Internal { .. } => 500,
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, DomainError::Internal { .. })
    }

    /// Message safe to hand to clients. Internal details stay in the logs.
    pub fn public_message(&self) -> String {
        if self.is_internal() {
            String::from("Internal server error")
        } else {
            self.to_string()
        }
    }

    /// Optional structured payload for the error envelope
    pub fn data(&self) -> Option<serde_json::Value> {
        match self {
            DomainError::BookingConflict { booking_id } => {
                Some(json!({ "conflictingBookingId": booking_id }))
            }
            DomainError::ValidationErr(err) => Some(err.details()),
            _ => None,
        }
    }
}
