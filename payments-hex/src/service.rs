//! Payment Application Service
//!
//! Orchestrates validation and the repository ports.
//! Contains NO infrastructure logic - pure business orchestration.

use rust_decimal::Decimal;
use tracing::debug;

use payments_types::{
    AppError, CreatePaymentRequest, EditPaymentMessageRequest, Payment, PaymentId,
    PaymentRepository, UserRepository, ValidationService,
};

/// Application service for payment operations.
///
/// Generic over its three collaborators so tests can inject doubles for any
/// of them:
/// - `U: UserRepository` - user lookup
/// - `P: PaymentRepository` - payment storage
/// - `V: ValidationService` - precondition checks
pub struct PaymentService<U, P, V>
where
    U: UserRepository,
    P: PaymentRepository,
    V: ValidationService,
{
    users: U,
    payments: P,
    validation: V,
}

impl<U, P, V> PaymentService<U, P, V>
where
    U: UserRepository,
    P: PaymentRepository,
    V: ValidationService,
{
    /// Creates a new payment service from its collaborators.
    pub fn new(users: U, payments: P, validation: V) -> Self {
        Self {
            users,
            payments,
            validation,
        }
    }

    /// Returns a reference to the payment repository.
    pub fn payments(&self) -> &P {
        &self.payments
    }

    /// Creates a payment with an empty message for an active user.
    #[tracing::instrument(skip(self))]
    pub fn create_payment(&self, req: CreatePaymentRequest) -> Result<Payment, AppError> {
        let user_id = self.validation.validate_user_id(req.user_id)?;
        let amount = self.validation.validate_amount(req.amount)?;

        let user = self
            .users
            .find_by_id(Some(user_id))?
            .ok_or_else(|| AppError::NotFound(format!("User {}", user_id)))?;
        self.validation.validate_user(&user)?;

        let payment = Payment::new(user_id, amount, String::new());
        let saved = self.payments.save(Some(payment))?;
        debug!(payment_id = %saved.payment_id, "Created payment");
        Ok(saved)
    }

    /// Replaces the message of an existing payment.
    #[tracing::instrument(skip(self))]
    pub fn edit_payment_message(
        &self,
        req: EditPaymentMessageRequest,
    ) -> Result<Payment, AppError> {
        let payment_id = self.validation.validate_payment_id(req.payment_id)?;
        let message = self.validation.validate_message(req.message)?;

        self.payments
            .edit_message(Some(payment_id), message)
            .map_err(Into::into)
    }

    /// Gets a payment by ID.
    #[tracing::instrument(skip(self))]
    pub fn get_payment(&self, id: Option<PaymentId>) -> Result<Payment, AppError> {
        let id = self.validation.validate_payment_id(id)?;

        self.payments
            .find_by_id(Some(id))
            .map_err(Into::into)
            .and_then(|opt| opt.ok_or_else(|| AppError::NotFound(format!("Payment {}", id))))
    }

    /// Lists every payment whose amount is strictly greater than `threshold`.
    #[tracing::instrument(skip(self))]
    pub fn get_all_by_amount_exceeding(
        &self,
        threshold: Decimal,
    ) -> Result<Vec<Payment>, AppError> {
        let payments = self.payments.find_all()?;

        Ok(payments
            .into_iter()
            .filter(|p| p.amount > threshold)
            .collect())
    }
}
