//! Image uploads.

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::domain::media::{extension_for, object_key, MediaFolder, UploadPolicy};
use crate::error::Result;
use crate::port::outbound::media::MediaStore;

const NONCE_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const NONCE_LEN: usize = 13;

/// A file as received from a multipart form.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: Option<String>,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Where a stored upload can be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredMedia {
    pub url: String,
    pub path: String,
}

pub struct MediaService {
    store: Arc<dyn MediaStore>,
    policy: UploadPolicy,
}

impl MediaService {
    pub fn new(store: Arc<dyn MediaStore>, policy: UploadPolicy) -> Self {
        Self { store, policy }
    }

    #[must_use]
    pub fn policy(&self) -> UploadPolicy {
        self.policy
    }

    /// Validate and store an upload under a fresh key.
    ///
    /// # Errors
    /// Returns a validation error for unknown folders, disallowed types and
    /// oversized files, or a storage error if the write fails.
    pub async fn upload(&self, folder: Option<&str>, upload: Upload) -> Result<StoredMedia> {
        let folder: MediaFolder = folder.unwrap_or_default().parse()?;
        self.policy
            .check(&upload.content_type, upload.bytes.len() as u64)?;

        let extension = extension_for(upload.file_name.as_deref(), &upload.content_type);
        let key = object_key(folder, Utc::now(), &nonce(), &extension);
        self.store.put(&key, &upload.bytes).await?;
        info!(key = %key, size = upload.bytes.len(), "upload stored");

        Ok(StoredMedia {
            url: self.store.public_url(&key),
            path: key,
        })
    }
}

fn nonce() -> String {
    let mut rng = rand::thread_rng();
    (0..NONCE_LEN)
        .map(|_| char::from(NONCE_ALPHABET[rng.gen_range(0..NONCE_ALPHABET.len())]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonce_is_lowercase_base36() {
        let n = nonce();
        assert_eq!(n.len(), NONCE_LEN);
        assert!(n.bytes().all(|b| NONCE_ALPHABET.contains(&b)));
    }
}
