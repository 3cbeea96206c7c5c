//! # Payments Repository
//!
//! Concrete repository implementations (adapters) for the payments exercise.
//! This crate provides in-memory adapters that implement the
//! `UserRepository` and `PaymentRepository` ports.

mod in_memory;


pub use in_memory::{InMemPaymentRepository, InMemUserRepository, default_users};
