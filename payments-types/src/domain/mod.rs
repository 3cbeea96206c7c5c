//! Domain models for the payments exercise.

pub mod payment;
pub mod user;

pub use payment::{Payment, PaymentId};
pub use user::{User, UserId, UserStatus};
