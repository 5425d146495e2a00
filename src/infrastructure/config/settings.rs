//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; the session signing secret can be
//! supplied through `AREA51_TOKEN_SECRET` instead of the file.
//!
//! # Example
//!
//! ```no_run
//! use area51::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::service::{AuthConfig, CheckoutConfig, DatabaseConfig, ServerConfig, StorageConfig};
use crate::error::{ConfigError, Result};

/// Environment variable holding the session signing secret.
pub const TOKEN_SECRET_ENV: &str = "AREA51_TOKEN_SECRET";

/// Shortest accepted signing secret, in bytes.
pub const MIN_SECRET_LEN: usize = 32;

/// Main application configuration.
///
/// Every section has defaults, so a file only needs the values it changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub checkout: CheckoutConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        if let Ok(secret) = std::env::var(TOKEN_SECRET_ENV) {
            if !secret.is_empty() {
                config.auth.token_secret = Some(secret);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "database.path",
            }
            .into());
        }
        if self.database.pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "database.pool_size",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        let Some(secret) = self.auth.token_secret.as_deref() else {
            return Err(ConfigError::MissingField {
                field: "auth.token_secret",
            }
            .into());
        };
        if secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::InvalidValue {
                field: "auth.token_secret",
                reason: format!("must be at least {MIN_SECRET_LEN} bytes"),
            }
            .into());
        }
        if self.auth.session_ttl_hours == 0 {
            return Err(ConfigError::InvalidValue {
                field: "auth.session_ttl_hours",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !(4..=31).contains(&self.auth.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                field: "auth.bcrypt_cost",
                reason: "must be between 4 and 31".to_string(),
            }
            .into());
        }

        if self.storage.media_root.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "storage.media_root",
            }
            .into());
        }
        if self.storage.max_upload_mb == 0 {
            return Err(ConfigError::InvalidValue {
                field: "storage.max_upload_mb",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        let checkout = &self.checkout;
        if checkout.delivery_fee < Decimal::ZERO || checkout.free_delivery_threshold < Decimal::ZERO
        {
            return Err(ConfigError::InvalidValue {
                field: "checkout",
                reason: "amounts must be 0 or greater".to_string(),
            }
            .into());
        }
        if checkout.tax_rate < Decimal::ZERO || checkout.tax_rate > Decimal::ONE {
            return Err(ConfigError::InvalidValue {
                field: "checkout.tax_rate",
                reason: "must be between 0 and 1".to_string(),
            }
            .into());
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: "must be \"pretty\" or \"json\"".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// The signing secret. Present on any config that passed validation.
    #[must_use]
    pub fn token_secret(&self) -> &str {
        self.auth.token_secret.as_deref().unwrap_or_default()
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
