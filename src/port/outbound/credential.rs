//! Password hashing port.

use async_trait::async_trait;

use crate::error::Result;

/// Hashing is CPU-bound; implementations keep it off the async workers.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plain password for storage.
    async fn hash(&self, plain: &str) -> Result<String>;

    /// Check a plain password against a stored hash.
    async fn verify(&self, plain: &str, hash: &str) -> Result<bool>;
}
