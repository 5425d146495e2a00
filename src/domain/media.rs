//! Image upload rules.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Content types accepted for menu and banner images.
pub const ALLOWED_CONTENT_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
    "image/gif",
];

const MIB: u64 = 1024 * 1024;

/// Storage folder an upload lands in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaFolder {
    #[default]
    #[serde(rename = "menu-items")]
    MenuItems,
    #[serde(rename = "banners")]
    Banners,
}

impl MediaFolder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MenuItems => "menu-items",
            Self::Banners => "banners",
        }
    }
}

impl fmt::Display for MediaFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaFolder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "menu-items" => Ok(Self::MenuItems),
            "banners" => Ok(Self::Banners),
            other => Err(DomainError::InvalidValue {
                field: "folder",
                reason: format!("unknown folder '{other}'"),
            }),
        }
    }
}

/// Size and type limits for uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_bytes: u64,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self { max_bytes: 5 * MIB }
    }
}

impl UploadPolicy {
    #[must_use]
    pub fn with_limit_mb(limit_mb: u64) -> Self {
        Self {
            max_bytes: limit_mb.saturating_mul(MIB),
        }
    }

    /// Check the declared content type and the payload size.
    ///
    /// # Errors
    /// Returns [`DomainError::UnsupportedMediaType`] or
    /// [`DomainError::MediaTooLarge`].
    pub fn check(&self, content_type: &str, size: u64) -> Result<(), DomainError> {
        let content_type = content_type.trim().to_ascii_lowercase();
        if !ALLOWED_CONTENT_TYPES.contains(&content_type.as_str()) {
            return Err(DomainError::UnsupportedMediaType(content_type));
        }
        if size > self.max_bytes {
            return Err(DomainError::MediaTooLarge {
                size,
                limit_mb: self.max_bytes / MIB,
            });
        }
        Ok(())
    }
}

/// Extensions that match an allowed content type, preferred one first.
fn image_extensions(content_type: &str) -> &'static [&'static str] {
    match content_type.trim().to_ascii_lowercase().as_str() {
        "image/png" => &["png"],
        "image/webp" => &["webp"],
        "image/gif" => &["gif"],
        _ => &["jpg", "jpeg"],
    }
}

/// File extension for a stored upload. The client's file name extension is
/// kept only when it names the declared image type; `/media` derives the
/// served content type from it.
#[must_use]
pub fn extension_for(file_name: Option<&str>, content_type: &str) -> String {
    let allowed = image_extensions(content_type);
    file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| allowed.contains(&ext.as_str()))
        .unwrap_or_else(|| allowed[0].to_string())
}

/// Storage key `<folder>/<unix millis>-<nonce>.<ext>`.
#[must_use]
pub fn object_key(folder: MediaFolder, now: DateTime<Utc>, nonce: &str, extension: &str) -> String {
    format!(
        "{}/{}-{}.{}",
        folder.as_str(),
        now.timestamp_millis(),
        nonce,
        extension
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn accepts_each_allowed_type() {
        let policy = UploadPolicy::default();
        for content_type in ALLOWED_CONTENT_TYPES {
            assert!(policy.check(content_type, 10).is_ok(), "{content_type}");
        }
    }

    #[test]
    fn rejects_other_types() {
        let err = UploadPolicy::default().check("image/svg+xml", 10).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid file type. Only JPEG, PNG, WebP, and GIF are allowed."
        );
    }

    #[test]
    fn limit_is_inclusive() {
        let policy = UploadPolicy::default();
        assert!(policy.check("image/png", 5 * MIB).is_ok());
        let err = policy.check("image/png", 5 * MIB + 1).unwrap_err();
        assert_eq!(err.to_string(), "File size exceeds 5MB limit");
    }

    #[test]
    fn extension_prefers_file_name() {
        assert_eq!(extension_for(Some("burger.JPEG"), "image/jpeg"), "jpeg");
        assert_eq!(extension_for(Some("burger.jpg"), "image/jpg"), "jpg");
        assert_eq!(extension_for(Some("no-extension"), "image/webp"), "webp");
        assert_eq!(extension_for(Some("weird.ph p"), "image/png"), "png");
        assert_eq!(extension_for(None, "image/gif"), "gif");
    }

    #[test]
    fn extension_must_match_the_declared_image_type() {
        assert_eq!(extension_for(Some("x.html"), "image/png"), "png");
        assert_eq!(extension_for(Some("x.svg"), "image/jpeg"), "jpg");
        assert_eq!(extension_for(Some("x.gif"), "image/webp"), "webp");
        assert_eq!(extension_for(Some("x.PNG"), "Image/PNG"), "png");
    }

    #[test]
    fn key_layout() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(
            object_key(MediaFolder::Banners, now, "abc123", "png"),
            "banners/1700000000123-abc123.png"
        );
    }

    #[test]
    fn folder_defaults_to_menu_items() {
        assert_eq!("".parse::<MediaFolder>().unwrap(), MediaFolder::MenuItems);
        assert_eq!("banners".parse::<MediaFolder>().unwrap(), MediaFolder::Banners);
        assert!("../etc".parse::<MediaFolder>().is_err());
    }
}
