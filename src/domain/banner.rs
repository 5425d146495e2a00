//! Storefront hero banners.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::BannerId;
use super::text::non_blank;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub id: BannerId,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: String,
    pub link_url: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Banner form, used for both create and replace.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BannerDraft {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

impl BannerDraft {
    fn image(&self) -> Result<String, DomainError> {
        non_blank(self.image_url.clone()).ok_or(DomainError::Required("Please upload an image"))
    }

    /// Build a new banner.
    ///
    /// # Errors
    /// Returns `Please upload an image` when no image url is given.
    pub fn into_banner(self, now: DateTime<Utc>) -> Result<Banner, DomainError> {
        let image_url = self.image()?;
        Ok(Banner {
            id: BannerId::new(),
            title: non_blank(self.title),
            subtitle: non_blank(self.subtitle),
            image_url,
            link_url: non_blank(self.link_url),
            is_active: self.is_active.unwrap_or(true),
            sort_order: self.sort_order.unwrap_or(0),
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace every editable field of `banner`.
    ///
    /// # Errors
    /// Same as [`BannerDraft::into_banner`].
    pub fn apply(self, banner: &mut Banner, now: DateTime<Utc>) -> Result<(), DomainError> {
        banner.image_url = self.image()?;
        banner.title = non_blank(self.title);
        banner.subtitle = non_blank(self.subtitle);
        banner.link_url = non_blank(self.link_url);
        banner.is_active = self.is_active.unwrap_or(true);
        banner.sort_order = self.sort_order.unwrap_or(0);
        banner.updated_at = now;
        Ok(())
    }
}
