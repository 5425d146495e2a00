//! Local filesystem object storage for uploaded images.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::error::{Error, Result};
use crate::port::outbound::media::MediaStore;

/// Stores objects as files under a root directory.
#[derive(Debug, Clone)]
pub struct LocalMediaStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalMediaStore {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `key` under the root, refusing anything that could escape it.
    fn resolve(&self, key: &str) -> Result<PathBuf> {
        let relative = Path::new(key);
        let safe = !key.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !safe {
            return Err(Error::Storage(format!("invalid object key '{key}'")));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.resolve(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::AlreadyExists => {
                    Error::Storage(format!("object '{key}' already exists"))
                }
                _ => Error::Io(e),
            })?;
        file.write_all(bytes).await?;
        file.flush().await?;

        debug!(key, size = bytes.len(), "stored media object");
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn writes_under_root_and_builds_url() {
        let dir = TempDir::new().unwrap();
        let store = LocalMediaStore::new(dir.path(), "http://localhost:8080/media/");

        store.put("menu-items/1-abc.png", b"png").await.unwrap();

        let written = std::fs::read(dir.path().join("menu-items/1-abc.png")).unwrap();
        assert_eq!(written, b"png");
        assert_eq!(
            store.public_url("menu-items/1-abc.png"),
            "http://localhost:8080/media/menu-items/1-abc.png"
        );
    }

    #[tokio::test]
    async fn never_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = LocalMediaStore::new(dir.path(), "/media");
        store.put("banners/a.gif", b"one").await.unwrap();

        let err = store.put("banners/a.gif", b"two").await.unwrap_err();
        assert!(matches!(err, Error::Storage(_)));
        assert_eq!(std::fs::read(dir.path().join("banners/a.gif")).unwrap(), b"one");
    }

    #[tokio::test]
    async fn rejects_escaping_keys() {
        let dir = TempDir::new().unwrap();
        let store = LocalMediaStore::new(dir.path(), "/media");
        for key in ["../evil.png", "/etc/passwd", ""] {
            assert!(store.put(key, b"x").await.is_err(), "{key}");
        }
    }
}
