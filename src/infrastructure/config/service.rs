//! Configuration sections for the HTTP server, database, sessions, media
//! storage and checkout pricing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::checkout::CheckoutPolicy;

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed CORS origins. Empty allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// SQLite database settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the database file.
    #[serde(default = "default_database_path")]
    pub path: String,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

fn default_database_path() -> String {
    "area51.db".to_string()
}

const fn default_pool_size() -> u32 {
    8
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            pool_size: default_pool_size(),
        }
    }
}

/// Session and password hashing settings.
///
/// The signing secret may also come from `AREA51_TOKEN_SECRET`, which wins
/// over the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default, skip_serializing)]
    pub token_secret: Option<String>,
    /// How long a session token stays valid.
    #[serde(default = "default_session_ttl_hours")]
    pub session_ttl_hours: u32,
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

const fn default_session_ttl_hours() -> u32 {
    24
}

const fn default_bcrypt_cost() -> u32 {
    10
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: None,
            session_ttl_hours: default_session_ttl_hours(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

/// Where uploads are written and how they are addressed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_media_root")]
    pub media_root: String,
    /// Prefix of public upload URLs, without a trailing slash.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    #[serde(default = "default_max_upload_mb")]
    pub max_upload_mb: u64,
}

fn default_media_root() -> String {
    "media".to_string()
}

fn default_public_base_url() -> String {
    "/media".to_string()
}

const fn default_max_upload_mb() -> u64 {
    5
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            media_root: default_media_root(),
            public_base_url: default_public_base_url(),
            max_upload_mb: default_max_upload_mb(),
        }
    }
}

/// Delivery fee and tax rules used to price carts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Subtotals above this amount ship for free.
    #[serde(default = "default_free_delivery_threshold")]
    pub free_delivery_threshold: Decimal,
    #[serde(default = "default_delivery_fee")]
    pub delivery_fee: Decimal,
    /// Tax as a fraction (0.0825 = 8.25 %).
    #[serde(default)]
    pub tax_rate: Decimal,
}

fn default_free_delivery_threshold() -> Decimal {
    Decimal::from(30)
}

fn default_delivery_fee() -> Decimal {
    Decimal::new(599, 2) // $5.99
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            free_delivery_threshold: default_free_delivery_threshold(),
            delivery_fee: default_delivery_fee(),
            tax_rate: Decimal::ZERO,
        }
    }
}

impl CheckoutConfig {
    #[must_use]
    pub fn policy(&self) -> CheckoutPolicy {
        CheckoutPolicy {
            free_delivery_threshold: self.free_delivery_threshold,
            delivery_fee: self.delivery_fee,
            tax_rate: self.tax_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_defaults_match_domain_policy() {
        assert_eq!(CheckoutConfig::default().policy(), CheckoutPolicy::default());
    }

    #[test]
    fn bind_address_joins_host_and_port() {
        let server = ServerConfig {
            host: "0.0.0.0".into(),
            port: 3000,
            cors_origins: vec![],
        };
        assert_eq!(server.bind_address(), "0.0.0.0:3000");
    }
}
