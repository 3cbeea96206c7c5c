//! # Payments Demo
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Seed the in-memory user repository
//! - Create the payment service
//! - Walk through create, edit and query, logging each outcome

mod config;

use std::fs;
use std::path::Path;

use anyhow::Context;
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payments_hex::{BasicValidationService, PaymentService};
use payments_repo::{InMemPaymentRepository, InMemUserRepository};
use payments_types::{
    CreatePaymentRequest, EditPaymentMessageRequest, PaymentResponse, User, UserRepository,
};

fn load_users(path: &Path) -> anyhow::Result<Vec<User>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading user seed file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing user seed file {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::from_env()?;

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let users = match &config.users_seed_path {
        Some(path) => {
            tracing::info!("Seeding users from {}", path.display());
            InMemUserRepository::with_users(load_users(path)?)
        }
        None => InMemUserRepository::new(),
    };

    let seeded = users.find_all()?;
    tracing::info!("Loaded {} users", seeded.len());

    // Create the payment service
    let service = PaymentService::new(
        users,
        InMemPaymentRepository::new(),
        BasicValidationService::new(),
    );

    let amounts = [
        Decimal::new(2233, 2),
        Decimal::new(6666, 2),
        Decimal::new(8888, 2),
    ];
    for user in &seeded {
        for amount in amounts {
            match service.create_payment(CreatePaymentRequest::new(user.id, amount)) {
                Ok(payment) => {
                    tracing::info!(user_id = %user.id, "Created payment {}", payment.payment_id);
                    let note = format!("{} paid {}", user.name, payment.amount);
                    let edited = service.edit_payment_message(EditPaymentMessageRequest::new(
                        payment.payment_id,
                        note,
                    ))?;
                    tracing::debug!(message = %edited.message, "Edited payment message");
                }
                Err(e) => tracing::warn!(user_id = %user.id, "Payment rejected: {}", e),
            }
        }
    }

    let exceeding = service.get_all_by_amount_exceeding(config.demo_threshold)?;
    tracing::info!(
        "{} payments exceed {}",
        exceeding.len(),
        config.demo_threshold
    );
    for payment in exceeding {
        let response = PaymentResponse::from(payment);
        tracing::info!("{}", serde_json::to_string(&response)?);
    }

    Ok(())
}
