//! PaymentService wired to the real in-memory adapters and validation.

use std::collections::HashSet;

use payments_hex::{BasicValidationService, PaymentService};
use payments_repo::{InMemPaymentRepository, InMemUserRepository};
use payments_types::{
    AppError, CreatePaymentRequest, EditPaymentMessageRequest, PaymentId, PaymentRepository,
};
use rust_decimal_macros::dec;

type Service = PaymentService<InMemUserRepository, InMemPaymentRepository, BasicValidationService>;

fn setup_service() -> Service {
    PaymentService::new(
        InMemUserRepository::new(),
        InMemPaymentRepository::new(),
        BasicValidationService::new(),
    )
}

#[test]
fn test_create_and_edit_payment() {
    let service = setup_service();

    let created = service
        .create_payment(CreatePaymentRequest::new(1, dec!(44.44)))
        .unwrap();
    assert_eq!(created.message, "");

    let edited = service
        .edit_payment_message(EditPaymentMessageRequest::new(created.payment_id, "rent"))
        .unwrap();
    assert_eq!(edited.message, "rent");
    assert_eq!(edited.amount, created.amount);

    let fetched = service.get_payment(Some(created.payment_id)).unwrap();
    assert_eq!(fetched, edited);
}

#[test]
fn test_inactive_seed_user_cannot_pay() {
    let service = setup_service();

    let result = service.create_payment(CreatePaymentRequest::new(3, dec!(10)));

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(service.payments().is_empty());
}

#[test]
fn test_non_positive_amount_rejected() {
    let service = setup_service();

    let result = service.create_payment(CreatePaymentRequest::new(1, dec!(0)));

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

#[test]
fn test_unknown_user_is_not_found() {
    let service = setup_service();

    let result = service.create_payment(CreatePaymentRequest::new(404, dec!(10)));

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[test]
fn test_edit_unknown_payment_is_not_found() {
    let service = setup_service();

    let result =
        service.edit_payment_message(EditPaymentMessageRequest::new(PaymentId::new(), "x"));

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[test]
fn test_threshold_query_over_created_payments() {
    let service = setup_service();
    let mut expected = HashSet::new();
    for (user, amount) in [(1, dec!(22.33)), (2, dec!(66.66)), (1, dec!(88.88))] {
        let payment = service
            .create_payment(CreatePaymentRequest::new(user, amount))
            .unwrap();
        if amount > dec!(55.55) {
            expected.insert(payment.payment_id);
        }
    }

    let exceeding = service.get_all_by_amount_exceeding(dec!(55.55)).unwrap();

    let actual: HashSet<PaymentId> = exceeding.iter().map(|p| p.payment_id).collect();
    assert_eq!(actual, expected);
    assert_eq!(service.payments().find_all().unwrap().len(), 3);
}
