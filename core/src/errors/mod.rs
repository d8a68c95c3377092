//! Domain-specific error types
//!
//! All failures surface as `DomainError` variants; the API layer maps them
//! to HTTP status codes and the `{ok: false, ...}` response envelope. None
//! of these are fatal — every error is recovered at the boundary.

use thiserror::Error;

use ky_shared::types::response::FieldErrors;

/// Failures of the OTP verification state machine
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpError {
    #[error("Verification code has expired")]
    Expired,

    #[error("Maximum verification attempts reached")]
    AttemptsExhausted,

    #[error("Invalid verification code")]
    Mismatch,
}

/// Access token failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,

    #[error("Invalid token")]
    Invalid,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// Malformed or missing input, single message
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Malformed input with per-field messages
    #[error("Validation failed")]
    Fields { errors: FieldErrors },

    /// A state transition or business invariant was violated
    #[error("Business rule violation: {message}")]
    BusinessRule { message: String },

    /// A referenced entity does not exist
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// The caller's role does not allow this operation
    #[error("Permission denied")]
    PermissionDenied,

    /// A booking would overlap an existing one
    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error(transparent)]
    Otp(#[from] OtpError),

    #[error(transparent)]
    Token(#[from] TokenError),

    /// Persistence layer failure
    #[error("Database error: {message}")]
    Database { message: String },

    /// Anything else unexpected
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Shorthand for a single-field validation error map
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.into(), vec![message.into()]);
        DomainError::Fields { errors }
    }

    /// Shorthand for a not-found error on a named resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
