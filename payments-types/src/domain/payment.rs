//! Payment domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserId;

/// Unique identifier for a Payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(Uuid);

impl PaymentId {
    /// Creates a new random PaymentId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PaymentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PaymentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A monetary record owned by a user.
///
/// Only `message` changes after creation; stores hand out clones so callers
/// never hold a reference into stored state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier
    pub payment_id: PaymentId,
    /// Positive amount (checked by validation, not here)
    pub amount: Decimal,
    /// Free-form note, empty on creation through the service
    pub message: String,
    /// Owning user
    pub user_id: UserId,
}

impl Payment {
    /// Creates a payment with a freshly generated identifier.
    pub fn new(user_id: impl Into<UserId>, amount: Decimal, message: impl Into<String>) -> Self {
        Self {
            payment_id: PaymentId::new(),
            amount,
            message: message.into(),
            user_id: user_id.into(),
        }
    }

    /// Reconstructs a payment with a known identifier.
    pub fn from_parts(
        payment_id: PaymentId,
        user_id: UserId,
        amount: Decimal,
        message: String,
    ) -> Self {
        Self {
            payment_id,
            amount,
            message,
            user_id,
        }
    }

    /// Returns a copy carrying `message`, all other fields untouched.
    pub fn with_message(&self, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..self.clone()
        }
    }
}
