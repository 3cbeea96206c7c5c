//! Configuration loading from environment.

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use rust_decimal::Decimal;

const DEFAULT_LOG_FILTER: &str = "info,payments_app=debug,payments_hex=debug";
const DEFAULT_THRESHOLD: &str = "55.55";

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_filter: String,
    pub users_seed_path: Option<PathBuf>,
    pub demo_threshold: Decimal,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let log_filter = lookup("LOG_FILTER").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let users_seed_path = lookup("USERS_SEED_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let raw_threshold =
            lookup("DEMO_THRESHOLD").unwrap_or_else(|| DEFAULT_THRESHOLD.to_string());
        let demo_threshold = raw_threshold
            .trim()
            .parse()
            .with_context(|| format!("DEMO_THRESHOLD is not a decimal: {raw_threshold:?}"))?;

        Ok(Self {
            log_filter,
            users_seed_path,
            demo_threshold,
        })
    }
}
