//! Error types for the payments exercise.
//!
//! Every failure is one of two kinds: an invalid argument or a missing
//! target. `AppError` exposes exactly those two kinds to callers.

use crate::domain::UserId;

/// Domain-level errors (precondition violations).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Amount must be positive")]
    NonPositiveAmount,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("User {0} is inactive")]
    InactiveUser(UserId),
}

/// Repository-level errors (data access failures).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepoError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Application-level errors returned by the payment service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn is_bad_request(&self) -> bool {
        matches!(self, AppError::BadRequest(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::InvalidArgument(msg) => AppError::BadRequest(msg),
            RepoError::NotFound(msg) => AppError::NotFound(msg),
        }
    }
}
