//! Domain-level errors.
//!
//! These errors represent rejected input before any store is touched.
//! They are independent of infrastructure concerns (store backend, CLI).

use thiserror::Error;

/// Domain-specific errors for wire decoding and validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Request body is not a well-formed user object
    #[error("Invalid user data: {0}")]
    InvalidData(String),

    /// Email failed the validity predicate
    #[error("Invalid email: {0}")]
    InvalidEmail(String),
}

impl DomainError {
    /// Create an invalid data error
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        DomainError::InvalidData(msg.into())
    }

    /// Create an invalid email error
    pub fn invalid_email(email: impl Into<String>) -> Self {
        DomainError::InvalidEmail(email.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
