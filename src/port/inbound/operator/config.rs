//! Configuration projections for operator-facing adapters.

use rust_decimal::Decimal;

use crate::error::Result;

/// Checkout section of a configuration view.
#[derive(Debug, Clone)]
pub struct ConfigCheckout {
    pub free_delivery_threshold: Decimal,
    pub delivery_fee: Decimal,
    pub tax_rate: Decimal,
}

/// Full configuration projection for `config show`. Secrets are reduced to
/// whether they are loaded.
#[derive(Debug, Clone)]
pub struct ConfigView {
    pub listen: String,
    pub cors_origins: Vec<String>,
    pub database_path: String,
    pub pool_size: u32,
    pub token_secret_loaded: bool,
    pub session_ttl_hours: u32,
    pub bcrypt_cost: u32,
    pub media_root: String,
    pub public_base_url: String,
    pub max_upload_mb: u64,
    pub checkout: ConfigCheckout,
    pub log_level: String,
    pub log_format: String,
}

/// Validation output for `config validate`.
#[derive(Debug, Clone, Default)]
pub struct ConfigValidationReport {
    pub warnings: Vec<String>,
}

/// Configuration use-cases for operator-facing adapters.
pub trait ConfigurationOperator: Send + Sync {
    /// Build a projection for `config show`.
    fn show_config(&self, config_toml: &str) -> Result<ConfigView>;

    /// Validate config and return non-fatal warnings.
    fn validate_config(&self, config_toml: &str) -> Result<ConfigValidationReport>;
}
