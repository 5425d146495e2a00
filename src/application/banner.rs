//! Storefront banners.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::banner::{Banner, BannerDraft};
use crate::domain::id::BannerId;
use crate::error::{Error, Result};
use crate::port::outbound::store::BannerStore;

pub struct BannerService {
    banners: Arc<dyn BannerStore>,
}

impl BannerService {
    pub fn new(banners: Arc<dyn BannerStore>) -> Self {
        Self { banners }
    }

    pub async fn list(&self) -> Result<Vec<Banner>> {
        self.banners.list().await
    }

    /// Active banners in display order.
    pub async fn active(&self) -> Result<Vec<Banner>> {
        let banners = self.banners.list().await?;
        Ok(banners.into_iter().filter(|b| b.is_active).collect())
    }

    pub async fn create(&self, draft: BannerDraft) -> Result<Banner> {
        let banner = draft.into_banner(Utc::now())?;
        self.banners.insert(&banner).await?;
        info!(banner_id = %banner.id, "banner created");
        Ok(banner)
    }

    pub async fn update(&self, id: &BannerId, draft: BannerDraft) -> Result<Banner> {
        let mut banner = self.banner(id).await?;
        draft.apply(&mut banner, Utc::now())?;
        self.banners.update(&banner).await?;
        Ok(banner)
    }

    pub async fn toggle(&self, id: &BannerId) -> Result<Banner> {
        let mut banner = self.banner(id).await?;
        banner.is_active = !banner.is_active;
        banner.updated_at = Utc::now();
        self.banners.update(&banner).await?;
        Ok(banner)
    }

    pub async fn delete(&self, id: &BannerId) -> Result<()> {
        if !self.banners.delete(id).await? {
            return Err(Error::not_found("banner", id));
        }
        Ok(())
    }

    async fn banner(&self, id: &BannerId) -> Result<Banner> {
        self.banners
            .get(id)
            .await?
            .ok_or_else(|| Error::not_found("banner", id))
    }
}
