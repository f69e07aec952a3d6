//! Unified error surface for user record operations.
//!
//! Every variant renders a fixed message that is safe to hand to an external
//! caller. Underlying store or codec causes are logged where they are folded
//! into a variant and never appear in the message.

use domain::DomainError;
use thiserror::Error;

/// Application error types, one per failure mode of a user operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppError {
    // Request errors
    #[error("invalid user data")]
    InvalidData,

    #[error("invalid email")]
    InvalidEmail,

    #[error("user already exists")]
    DuplicateUser,

    #[error("user does not exist")]
    UserNotFound,

    // Store read errors
    #[error("failed to fetch record")]
    Fetch,

    #[error("failed to unmarshal record")]
    Unmarshal,

    // Store write errors
    #[error("could not marshal item")]
    Marshal,

    #[error("could not put item")]
    Write,

    #[error("could not delete item")]
    Delete,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidData => "INVALID_DATA",
            AppError::InvalidEmail => "INVALID_EMAIL",
            AppError::DuplicateUser => "USER_EXISTS",
            AppError::UserNotFound => "USER_NOT_FOUND",
            AppError::Fetch => "FETCH_FAILED",
            AppError::Unmarshal => "UNMARSHAL_FAILED",
            AppError::Marshal => "MARSHAL_FAILED",
            AppError::Write => "WRITE_FAILED",
            AppError::Delete => "DELETE_FAILED",
        }
    }

    /// Whether the caller's input caused the failure (as opposed to the store).
    ///
    /// A transport layer can use this to pick between a 4xx and a 5xx status.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidData
                | AppError::InvalidEmail
                | AppError::DuplicateUser
                | AppError::UserNotFound
        )
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        tracing::debug!("Rejected user input: {}", err);
        match err {
            DomainError::InvalidData(_) => AppError::InvalidData,
            DomainError::InvalidEmail(_) => AppError::InvalidEmail,
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
