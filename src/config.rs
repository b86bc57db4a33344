//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables
//! into a type-safe struct.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::performance::ReportSettings;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): PostgreSQL connection string
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `TARGET_AMOUNT` (optional): sales target every shop is measured against, defaults to 30000
/// - `CURRENCY_SYMBOL` (optional): symbol printed in alerts, defaults to "KSH"
/// - `BOOTSTRAP_STAFF_USERNAME` (optional): staff user created at startup when none exists
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_target_amount")]
    pub target_amount: Decimal,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    #[serde(default)]
    pub bootstrap_staff_username: Option<String>,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

fn default_target_amount() -> Decimal {
    Decimal::from(30_000)
}

fn default_currency_symbol() -> String {
    "KSH".to_string()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required environment variables are missing (e.g., DATABASE_URL)
    /// - Environment variable values cannot be parsed into expected types
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Field names are automatically converted: target_amount -> TARGET_AMOUNT
        envy::from_env::<Config>()
    }

    /// Report parameters shared by every performance request.
    pub fn report_settings(&self) -> ReportSettings {
        ReportSettings {
            target_amount: self.target_amount,
            currency_symbol: self.currency_symbol.clone(),
        }
    }
}
