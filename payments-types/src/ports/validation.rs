//! Validation port trait.

use rust_decimal::Decimal;

use crate::domain::{PaymentId, User, UserId};
use crate::error::DomainError;

/// Stateless precondition checks run before anything reaches a repository.
///
/// Checks on optional inputs hand back the present value on success.
#[cfg_attr(feature = "mocks", mockall::automock)]
pub trait ValidationService: Send + Sync + 'static {
    /// Rejects a missing or non-positive amount.
    fn validate_amount(&self, amount: Option<Decimal>) -> Result<Decimal, DomainError>;

    /// Rejects a missing payment ID.
    fn validate_payment_id(&self, id: Option<PaymentId>) -> Result<PaymentId, DomainError>;

    /// Rejects a missing user ID.
    fn validate_user_id(&self, id: Option<UserId>) -> Result<UserId, DomainError>;

    /// Rejects an inactive user.
    fn validate_user(&self, user: &User) -> Result<(), DomainError>;

    /// Rejects a missing message.
    fn validate_message(&self, message: Option<String>) -> Result<String, DomainError>;
}
