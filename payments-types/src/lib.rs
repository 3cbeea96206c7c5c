//! # Payments Types
//!
//! Domain types and port traits for the payments mocking exercise.
//! This crate has no IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (User, Payment)
//! - `ports/` - Trait definitions that adapters and services must implement
//! - `dto/` - Request and response shapes for the service boundary
//! - `error/` - Domain, repository and application error types
//!
//! Enable the `mocks` feature to get `mockall` doubles of every port.

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Payment, PaymentId, User, UserId, UserStatus};
pub use dto::*;
pub use error::{AppError, DomainError, RepoError};
pub use ports::{PaymentRepository, UserRepository, ValidationService};

#[cfg(feature = "mocks")]
pub use ports::{MockPaymentRepository, MockUserRepository, MockValidationService};
