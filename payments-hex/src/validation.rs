//! Basic validation service.

use rust_decimal::Decimal;
use tracing::warn;

use payments_types::{DomainError, PaymentId, User, UserId, ValidationService};

/// Default `ValidationService`: null checks plus the positive-amount and
/// active-user rules.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicValidationService;

impl BasicValidationService {
    pub fn new() -> Self {
        Self
    }
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, DomainError> {
    value.ok_or_else(|| {
        warn!(field = field, "Rejected missing value");
        DomainError::MissingField(field)
    })
}

impl ValidationService for BasicValidationService {
    fn validate_amount(&self, amount: Option<Decimal>) -> Result<Decimal, DomainError> {
        let amount = required(amount, "amount")?;
        if amount <= Decimal::ZERO {
            warn!(amount = %amount, "Rejected non-positive amount");
            return Err(DomainError::NonPositiveAmount);
        }
        Ok(amount)
    }

    fn validate_payment_id(&self, id: Option<PaymentId>) -> Result<PaymentId, DomainError> {
        required(id, "payment_id")
    }

    fn validate_user_id(&self, id: Option<UserId>) -> Result<UserId, DomainError> {
        required(id, "user_id")
    }

    fn validate_user(&self, user: &User) -> Result<(), DomainError> {
        if !user.is_active() {
            warn!(user_id = %user.id, "Rejected inactive user");
            return Err(DomainError::InactiveUser(user.id));
        }
        Ok(())
    }

    fn validate_message(&self, message: Option<String>) -> Result<String, DomainError> {
        required(message, "message")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payments_types::UserStatus;
    use rust_decimal_macros::dec;

    #[test]
    fn test_null_amount_fails() {
        let result = BasicValidationService::new().validate_amount(None);
        assert_eq!(result, Err(DomainError::MissingField("amount")));
    }

    #[test]
    fn test_non_positive_amount_fails() {
        let service = BasicValidationService::new();
        assert_eq!(
            service.validate_amount(Some(dec!(-13.13))),
            Err(DomainError::NonPositiveAmount)
        );
        assert_eq!(
            service.validate_amount(Some(Decimal::ZERO)),
            Err(DomainError::NonPositiveAmount)
        );
    }

    #[test]
    fn test_positive_amount_passes() {
        let result = BasicValidationService::new().validate_amount(Some(dec!(15.15)));
        assert_eq!(result, Ok(dec!(15.15)));
    }

    #[test]
    fn test_payment_id_checks() {
        let service = BasicValidationService::new();
        let id = PaymentId::new();

        assert!(matches!(
            service.validate_payment_id(None),
            Err(DomainError::MissingField(_))
        ));
        assert_eq!(service.validate_payment_id(Some(id)), Ok(id));
    }

    #[test]
    fn test_user_id_checks() {
        let service = BasicValidationService::new();

        assert!(matches!(
            service.validate_user_id(None),
            Err(DomainError::MissingField(_))
        ));
        assert_eq!(
            service.validate_user_id(Some(UserId::new(123))),
            Ok(UserId::new(123))
        );
    }

    #[test]
    fn test_inactive_user_fails() {
        let user = User::new(1, "Victor Nani", UserStatus::Inactive);

        let result = BasicValidationService::new().validate_user(&user);

        assert_eq!(result, Err(DomainError::InactiveUser(UserId::new(1))));
    }

    #[test]
    fn test_active_user_passes() {
        let user = User::new(1, "Victor Nani", UserStatus::Active);
        assert!(BasicValidationService::new().validate_user(&user).is_ok());
    }

    #[test]
    fn test_message_checks() {
        let service = BasicValidationService::new();

        assert!(matches!(
            service.validate_message(None),
            Err(DomainError::MissingField(_))
        ));
        assert_eq!(
            service.validate_message(Some("Victor".to_string())),
            Ok("Victor".to_string())
        );
        assert_eq!(
            service.validate_message(Some(String::new())),
            Ok(String::new())
        );
    }
}
