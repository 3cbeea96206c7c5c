//! # Payments Hex
//!
//! Application service layer for the payments exercise.
//!
//! ## Architecture
//!
//! - `validation/` - `BasicValidationService`, the default precondition checks
//! - `service/` - `PaymentService` (orchestrates validation and repositories)
//!
//! The service is generic over every port it uses, allowing different
//! implementations (or test doubles) to be injected.

pub mod service;
pub mod validation;


pub use service::PaymentService;
pub use validation::BasicValidationService;
