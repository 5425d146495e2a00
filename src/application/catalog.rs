//! Menu categories and items, for the dashboard and the storefront.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::domain::category::{Category, CategoryDraft};
use crate::domain::error::DomainError;
use crate::domain::id::{CategoryId, MenuItemId};
use crate::domain::menu::{MenuItem, MenuItemDraft, MenuItemListing, MenuItemPatch, MenuQuery};
use crate::error::{Error, Result};
use crate::port::outbound::store::{CategoryStore, MenuItemStore};

/// What the storefront menu page shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicMenu {
    pub categories: Vec<Category>,
    pub menu_items: Vec<MenuItemListing>,
}

pub struct CatalogService {
    categories: Arc<dyn CategoryStore>,
    items: Arc<dyn MenuItemStore>,
}

impl CatalogService {
    pub fn new(categories: Arc<dyn CategoryStore>, items: Arc<dyn MenuItemStore>) -> Self {
        Self { categories, items }
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        self.categories.list().await
    }

    pub async fn create_category(&self, draft: CategoryDraft) -> Result<Category> {
        let category = draft.into_category(Utc::now())?;
        self.categories.insert(&category).await?;
        info!(category_id = %category.id, name = %category.name, "category created");
        Ok(category)
    }

    /// Replace every editable field of a category.
    pub async fn update_category(&self, id: &CategoryId, draft: CategoryDraft) -> Result<Category> {
        let mut category = self.category(id).await?;
        draft.apply(&mut category, Utc::now())?;
        self.categories.update(&category).await?;
        Ok(category)
    }

    pub async fn toggle_category(&self, id: &CategoryId) -> Result<Category> {
        let mut category = self.category(id).await?;
        category.is_active = !category.is_active;
        category.updated_at = Utc::now();
        self.categories.update(&category).await?;
        Ok(category)
    }

    pub async fn delete_category(&self, id: &CategoryId) -> Result<()> {
        if !self.categories.delete(id).await? {
            return Err(Error::not_found("category", id));
        }
        info!(category_id = %id, "category deleted");
        Ok(())
    }

    async fn category(&self, id: &CategoryId) -> Result<Category> {
        self.categories
            .get(id)
            .await?
            .ok_or_else(|| Error::not_found("category", id))
    }

    /// Every item with its category, newest first.
    pub async fn list_items(&self) -> Result<Vec<MenuItemListing>> {
        self.items.list().await
    }

    /// # Errors
    /// Returns a validation error when the form is incomplete or names a
    /// category that does not exist.
    pub async fn create_item(&self, draft: MenuItemDraft) -> Result<MenuItem> {
        let item = draft.into_item(Utc::now())?;
        if let Some(category) = &item.category_id {
            self.require_category(category).await?;
        }
        self.items.insert(&item).await?;
        info!(item_id = %item.id, name = %item.name, "menu item created");
        Ok(item)
    }

    /// Change only the fields present in `patch`.
    pub async fn patch_item(&self, patch: MenuItemPatch) -> Result<MenuItem> {
        let id = patch.target()?;
        if let Some(Some(category)) = patch.category_change() {
            self.require_category(&category).await?;
        }
        let mut item = self
            .items
            .get(&id)
            .await?
            .ok_or_else(|| Error::not_found("menu item", &id))?;
        patch.apply(&mut item, Utc::now())?;
        self.items.update(&item).await?;
        Ok(item)
    }

    pub async fn delete_item(&self, id: Option<String>) -> Result<()> {
        let id = id
            .filter(|s| !s.trim().is_empty())
            .map(MenuItemId::from)
            .ok_or(DomainError::Required("Menu item ID is required"))?;
        if !self.items.delete(&id).await? {
            return Err(Error::not_found("menu item", &id));
        }
        info!(item_id = %id, "menu item deleted");
        Ok(())
    }

    async fn require_category(&self, id: &CategoryId) -> Result<()> {
        match self.categories.get(id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::InvalidValue {
                field: "category_id",
                reason: format!("unknown category {id}"),
            }
            .into()),
        }
    }

    /// Active categories by name and available items, newest first,
    /// narrowed by `query`.
    pub async fn public_menu(&self, query: &MenuQuery) -> Result<PublicMenu> {
        let mut categories: Vec<Category> = self
            .categories
            .list()
            .await?
            .into_iter()
            .filter(|c| c.is_active)
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));

        let menu_items = self
            .items
            .list()
            .await?
            .into_iter()
            .filter(|listing| listing.item.is_available && query.matches(listing))
            .collect();

        Ok(PublicMenu {
            categories,
            menu_items,
        })
    }
}
