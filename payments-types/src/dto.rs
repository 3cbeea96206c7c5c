//! Data Transfer Objects (DTOs) for requests and responses.
//!
//! Request fields are optional: an absent value is rejected by validation
//! rather than by deserialization.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Payment, PaymentId, UserId};

// ─────────────────────────────────────────────────────────────────────────────
// Payment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a payment for a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    /// Owning user
    pub user_id: Option<UserId>,
    /// Amount, must be strictly positive
    pub amount: Option<Decimal>,
}

impl CreatePaymentRequest {
    pub fn new(user_id: impl Into<UserId>, amount: Decimal) -> Self {
        Self {
            user_id: Some(user_id.into()),
            amount: Some(amount),
        }
    }
}

/// Request to replace the message of an existing payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditPaymentMessageRequest {
    /// Target payment
    pub payment_id: Option<PaymentId>,
    /// Replacement message
    pub message: Option<String>,
}

impl EditPaymentMessageRequest {
    pub fn new(payment_id: PaymentId, message: impl Into<String>) -> Self {
        Self {
            payment_id: Some(payment_id),
            message: Some(message.into()),
        }
    }
}

/// Serializable view of a payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub payment_id: PaymentId,
    pub user_id: UserId,
    pub amount: Decimal,
    pub message: String,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            payment_id: payment.payment_id,
            user_id: payment.user_id,
            amount: payment.amount,
            message: payment.message,
        }
    }
}
