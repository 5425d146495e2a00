//! Canonical test configurations.
//!
//! Single source of truth for the [`Config`] used across tests, so each test
//! module does not define its own slightly-different defaults.

use std::path::Path;

use rust_decimal_macros::dec;

use crate::infrastructure::config::service::{
    AuthConfig, CheckoutConfig, DatabaseConfig, StorageConfig,
};
use crate::infrastructure::config::settings::Config;

/// Signing secret long enough to pass validation.
pub const TOKEN_SECRET: &str = "area51-test-secret-0123456789abcdef";

/// A valid configuration whose database and media live under `dir`.
///
/// Uses the cheapest bcrypt cost so password tests stay fast.
pub fn config(dir: &Path) -> Config {
    Config {
        database: DatabaseConfig {
            path: dir.join("area51.db").display().to_string(),
            pool_size: 4,
        },
        auth: AuthConfig {
            token_secret: Some(TOKEN_SECRET.to_string()),
            session_ttl_hours: 1,
            bcrypt_cost: 4,
        },
        storage: StorageConfig {
            media_root: dir.join("media").display().to_string(),
            public_base_url: "/media".to_string(),
            max_upload_mb: 1,
        },
        checkout: CheckoutConfig {
            free_delivery_threshold: dec!(30),
            delivery_fee: dec!(5.99),
            tax_rate: dec!(0),
        },
        ..Config::default()
    }
}

/// The TOML form of [`config`], for tests that go through file loading.
pub fn config_toml(dir: &Path) -> String {
    let config = config(dir);
    format!(
        "[database]\npath = {:?}\n\n[auth]\ntoken_secret = {:?}\nbcrypt_cost = 4\n\n[storage]\nmedia_root = {:?}\n",
        config.database.path,
        TOKEN_SECRET,
        config.storage.media_root,
    )
}
