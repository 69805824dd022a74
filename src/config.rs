//! Configuration for the console front end

use std::env;

/// Runtime settings, read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct BankConfig {
    /// Name shown in the welcome banner
    pub bank_name: String,
    /// Default tracing filter level
    pub log_level: String,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            bank_name: env::var("BANK_NAME").unwrap_or_else(|_| "Top Secret Funds".to_string()),
            log_level: env::var("BANK_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
        }
    }
}

impl BankConfig {
    /// Create a new configuration using environment variables
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Create a new configuration with custom values
    pub fn new(bank_name: String, log_level: String) -> Self {
        Self {
            bank_name,
            log_level,
        }
    }
}
