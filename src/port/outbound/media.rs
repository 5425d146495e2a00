//! Object storage port for uploaded images.

use async_trait::async_trait;

use crate::error::Result;

#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Store `bytes` under `key`. Existing objects are never overwritten.
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<()>;

    /// Public URL clients use to fetch the object.
    fn public_url(&self, key: &str) -> String;
}
