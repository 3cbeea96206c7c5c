//! In-memory adapters backed by `DashMap`.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::{debug, warn};

use payments_types::{
    Payment, PaymentId, PaymentRepository, RepoError, User, UserId, UserRepository, UserStatus,
};

/// The fixture users every fresh `InMemUserRepository` starts with.
pub fn default_users() -> Vec<User> {
    vec![
        User::new(1, "John", UserStatus::Active),
        User::new(2, "Marry", UserStatus::Active),
        User::new(3, "Peter", UserStatus::Inactive),
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

/// Read-only user store, seeded at construction.
#[derive(Debug)]
pub struct InMemUserRepository {
    users: DashMap<UserId, User>,
}

impl InMemUserRepository {
    /// Creates a repository seeded with [`default_users`].
    pub fn new() -> Self {
        Self::with_users(default_users())
    }

    /// Creates a repository seeded with `users`. A later user replaces an
    /// earlier one with the same ID.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users: DashMap<UserId, User> = users.into_iter().map(|u| (u.id, u)).collect();
        debug!("Seeded user repository with {} users", users.len());
        Self { users }
    }
}

impl Default for InMemUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository for InMemUserRepository {
    fn find_by_id(&self, id: Option<UserId>) -> Result<Option<User>, RepoError> {
        let id = id.ok_or_else(|| RepoError::InvalidArgument("User ID must not be null".into()))?;
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    fn find_all(&self) -> Result<Vec<User>, RepoError> {
        Ok(self.users.iter().map(|u| u.value().clone()).collect())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payments
// ─────────────────────────────────────────────────────────────────────────────

/// Payment store keyed by `PaymentId`.
#[derive(Debug, Default)]
pub struct InMemPaymentRepository {
    payments: DashMap<PaymentId, Payment>,
}

impl InMemPaymentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored payments.
    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }
}

impl PaymentRepository for InMemPaymentRepository {
    fn save(&self, payment: Option<Payment>) -> Result<Payment, RepoError> {
        let payment =
            payment.ok_or_else(|| RepoError::InvalidArgument("Payment must not be null".into()))?;

        match self.payments.entry(payment.payment_id) {
            Entry::Occupied(_) => {
                warn!(payment_id = %payment.payment_id, "Rejected duplicate payment");
                Err(RepoError::InvalidArgument(format!(
                    "Payment with id {} already saved",
                    payment.payment_id
                )))
            }
            Entry::Vacant(slot) => {
                debug!(payment_id = %payment.payment_id, amount = %payment.amount, "Saved payment");
                Ok(slot.insert(payment).value().clone())
            }
        }
    }

    fn edit_message(
        &self,
        id: Option<PaymentId>,
        new_message: String,
    ) -> Result<Payment, RepoError> {
        let id = id.ok_or_else(|| RepoError::NotFound("Payment ID must not be null".into()))?;
        let mut stored = self
            .payments
            .get_mut(&id)
            .ok_or_else(|| RepoError::NotFound(format!("Payment {}", id)))?;

        stored.message = new_message;
        debug!(payment_id = %id, "Edited payment message");
        Ok(stored.value().clone())
    }

    fn find_by_id(&self, id: Option<PaymentId>) -> Result<Option<Payment>, RepoError> {
        let id =
            id.ok_or_else(|| RepoError::InvalidArgument("Payment ID must not be null".into()))?;
        Ok(self.payments.get(&id).map(|p| p.value().clone()))
    }

    fn find_all(&self) -> Result<Vec<Payment>, RepoError> {
        Ok(self.payments.iter().map(|p| p.value().clone()).collect())
    }
}
