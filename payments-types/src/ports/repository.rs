//! Repository port traits.
//!
//! Adapters (in-memory today) implement these traits. Identifiers arrive as
//! `Option` so an absent key is reported as an error instead of being
//! unrepresentable at the call site.

use crate::domain::{Payment, PaymentId, User, UserId};
use crate::error::RepoError;

/// Read-only lookup of seeded users.
#[cfg_attr(feature = "mocks", mockall::automock)]
pub trait UserRepository: Send + Sync + 'static {
    /// Gets a user by ID. Fails with `InvalidArgument` when `id` is absent.
    fn find_by_id(&self, id: Option<UserId>) -> Result<Option<User>, RepoError>;

    /// Lists all seeded users in no particular order.
    fn find_all(&self) -> Result<Vec<User>, RepoError>;
}

/// Keyed store of payments.
///
/// Every returned `Payment` is a copy; mutating it never affects the store.
#[cfg_attr(feature = "mocks", mockall::automock)]
pub trait PaymentRepository: Send + Sync + 'static {
    /// Stores a new payment. Fails with `InvalidArgument` when the payment
    /// is absent or its ID is already taken.
    fn save(&self, payment: Option<Payment>) -> Result<Payment, RepoError>;

    /// Replaces only the message of a stored payment. Fails with `NotFound`
    /// when `id` is absent or unknown.
    fn edit_message(
        &self,
        id: Option<PaymentId>,
        new_message: String,
    ) -> Result<Payment, RepoError>;

    /// Gets a payment by ID. Fails with `InvalidArgument` when `id` is absent.
    fn find_by_id(&self, id: Option<PaymentId>) -> Result<Option<Payment>, RepoError>;

    /// Lists all stored payments in no particular order.
    fn find_all(&self) -> Result<Vec<Payment>, RepoError>;
}
