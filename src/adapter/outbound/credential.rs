//! bcrypt password hashing.
//!
//! Hashes use the `$2b$` format, so accounts created by other bcrypt
//! implementations keep working.

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::port::outbound::credential::PasswordHasher;

/// Default work factor.
pub const DEFAULT_COST: u32 = 10;

/// [`PasswordHasher`] backed by bcrypt, run on the blocking thread pool.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    #[must_use]
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

fn credential_error(err: impl std::fmt::Display) -> Error {
    Error::Credential(format!("password hash: {err}"))
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash(&self, plain: &str) -> Result<String> {
        let plain = plain.to_owned();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(plain, cost))
            .await
            .map_err(credential_error)?
            .map_err(credential_error)
    }

    async fn verify(&self, plain: &str, hash: &str) -> Result<bool> {
        let plain = plain.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || bcrypt::verify(plain, &hash))
            .await
            .map_err(credential_error)?
            .map_err(credential_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_then_verify() {
        let hasher = BcryptHasher::new(4);
        let hash = hasher.hash("Area51ok").await.unwrap();
        assert!(hash.starts_with("$2"));
        assert!(hasher.verify("Area51ok", &hash).await.unwrap());
        assert!(!hasher.verify("area51ok", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn salts_differ_between_hashes() {
        let hasher = BcryptHasher::new(4);
        assert_ne!(
            hasher.hash("same").await.unwrap(),
            hasher.hash("same").await.unwrap()
        );
    }

    #[tokio::test]
    async fn malformed_hash_is_a_credential_error() {
        let err = BcryptHasher::new(4).verify("x", "not-a-hash").await.unwrap_err();
        assert!(matches!(err, Error::Credential(_)));
    }
}
