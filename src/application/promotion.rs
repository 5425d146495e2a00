//! Promotions and the menu items they cover.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::error::DomainError;
use crate::domain::id::{MenuItemId, PromotionId, PromotionItemId};
use crate::domain::promotion::{
    Promotion, PromotionDraft, PromotionItem, PromotionItemsChange, PromotionListing,
};
use crate::domain::text::non_blank;
use crate::error::{Error, Result};
use crate::port::outbound::store::{MenuItemStore, PromotionStore};

pub struct PromotionService {
    promotions: Arc<dyn PromotionStore>,
    items: Arc<dyn MenuItemStore>,
}

impl PromotionService {
    pub fn new(promotions: Arc<dyn PromotionStore>, items: Arc<dyn MenuItemStore>) -> Self {
        Self { promotions, items }
    }

    /// Promotions newest first, optionally filtered by name or description.
    pub async fn list(&self, search: Option<String>) -> Result<Vec<PromotionListing>> {
        let listings = self.promotions.list().await?;
        Ok(match non_blank(search) {
            Some(needle) => {
                let needle = needle.to_lowercase();
                listings
                    .into_iter()
                    .filter(|l| l.promotion.matches(&needle))
                    .collect()
            }
            None => listings,
        })
    }

    /// Active promotions that have started and not yet ended.
    pub async fn running(&self) -> Result<Vec<PromotionListing>> {
        let now = Utc::now();
        let listings = self.promotions.list().await?;
        Ok(listings
            .into_iter()
            .filter(|l| l.promotion.is_running(now))
            .collect())
    }

    pub async fn create(&self, draft: PromotionDraft) -> Result<Promotion> {
        let promotion = draft.into_promotion(Utc::now())?;
        self.promotions.insert(&promotion).await?;
        info!(promotion_id = %promotion.id, kind = %promotion.kind, "promotion created");
        Ok(promotion)
    }

    pub async fn update(&self, id: &PromotionId, draft: PromotionDraft) -> Result<Promotion> {
        let mut promotion = self.promotion(id).await?;
        draft.apply(&mut promotion, Utc::now())?;
        self.promotions.update(&promotion).await?;
        Ok(promotion)
    }

    pub async fn toggle(&self, id: &PromotionId) -> Result<Promotion> {
        let mut promotion = self.promotion(id).await?;
        promotion.is_active = !promotion.is_active;
        promotion.updated_at = Utc::now();
        self.promotions.update(&promotion).await?;
        Ok(promotion)
    }

    pub async fn delete(&self, id: &PromotionId) -> Result<()> {
        if !self.promotions.delete(id).await? {
            return Err(Error::not_found("promotion", id));
        }
        info!(promotion_id = %id, "promotion deleted");
        Ok(())
    }

    /// Replace the set of linked menu items. Duplicate ids collapse.
    ///
    /// # Errors
    /// Returns a validation error if any id is not a menu item.
    pub async fn replace_items(
        &self,
        id: &PromotionId,
        change: PromotionItemsChange,
    ) -> Result<PromotionListing> {
        let promotion = self.promotion(id).await?;

        let wanted: Vec<MenuItemId> = change
            .menu_item_ids
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let known = self.items.get_many(&wanted).await?;
        if let Some(missing) = wanted.iter().find(|id| !known.iter().any(|k| &k.id == *id)) {
            return Err(DomainError::InvalidValue {
                field: "menu_item_ids",
                reason: format!("unknown menu item {missing}"),
            }
            .into());
        }

        let now = Utc::now();
        let links: Vec<PromotionItem> = wanted
            .into_iter()
            .map(|menu_item_id| PromotionItem {
                id: PromotionItemId::new(),
                promotion_id: id.clone(),
                menu_item_id,
                created_at: now,
            })
            .collect();
        self.promotions.replace_items(id, &links).await?;
        info!(promotion_id = %id, items = links.len(), "promotion items replaced");

        Ok(PromotionListing {
            promotion,
            promotion_items: links,
        })
    }

    async fn promotion(&self, id: &PromotionId) -> Result<Promotion> {
        self.promotions
            .get(id)
            .await?
            .ok_or_else(|| Error::not_found("promotion", id))
    }
}
