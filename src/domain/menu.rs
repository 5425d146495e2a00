//! Menu items and the public menu view.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::category::Category;
use super::error::DomainError;
use super::id::{CategoryId, MenuItemId};
use super::money::Money;
use super::text::{contains_ignore_case, non_blank};

/// A dish or drink that can be ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub category_id: Option<CategoryId>,
    pub name: String,
    pub description: Option<String>,
    pub price: Money,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub is_featured: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A menu item joined with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItemListing {
    #[serde(flatten)]
    pub item: MenuItem,
    pub category: Option<Category>,
}

fn check_price(price: Decimal) -> Result<Decimal, DomainError> {
    if price < Decimal::ZERO {
        return Err(DomainError::NegativePrice { price });
    }
    Ok(price)
}

/// Create-item form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuItemDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category_id: Option<String>,
    pub is_available: Option<bool>,
    pub is_featured: Option<bool>,
    pub sort_order: Option<i32>,
    pub image_url: Option<String>,
}

impl MenuItemDraft {
    /// Build a new menu item.
    ///
    /// # Errors
    /// Returns `Name, price, and category are required` when any is missing,
    /// or [`DomainError::NegativePrice`].
    pub fn into_item(self, now: DateTime<Utc>) -> Result<MenuItem, DomainError> {
        let (Some(name), Some(price), Some(category_id)) =
            (non_blank(self.name), self.price, non_blank(self.category_id))
        else {
            return Err(DomainError::Required(
                "Name, price, and category are required",
            ));
        };

        Ok(MenuItem {
            id: MenuItemId::new(),
            category_id: Some(CategoryId::from(category_id)),
            name,
            description: non_blank(self.description),
            price: check_price(price)?,
            image_url: non_blank(self.image_url),
            is_available: self.is_available.unwrap_or(true),
            is_featured: self.is_featured.unwrap_or(false),
            sort_order: self.sort_order.unwrap_or(0),
            created_at: now,
            updated_at: now,
        })
    }
}

/// Partial update of a menu item. Only supplied fields change. For the
/// nullable fields the outer `Option` is presence and the inner one is the
/// value, so an explicit `null` or an empty string clears them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuItemPatch {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "present")]
    pub category_id: Option<Option<String>>,
    pub is_available: Option<bool>,
    pub is_featured: Option<bool>,
    pub sort_order: Option<i32>,
    #[serde(default, deserialize_with = "present")]
    pub image_url: Option<Option<String>>,
}

/// Marks a field as supplied, keeping `null` as `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl MenuItemPatch {
    /// The item being patched.
    ///
    /// # Errors
    /// Returns `Menu item ID is required` when absent.
    pub fn target(&self) -> Result<MenuItemId, DomainError> {
        non_blank(self.id.clone())
            .map(MenuItemId::from)
            .ok_or(DomainError::Required("Menu item ID is required"))
    }

    /// The new category, if the patch changes it.
    #[must_use]
    pub fn category_change(&self) -> Option<Option<CategoryId>> {
        self.category_id
            .as_ref()
            .map(|raw| non_blank(raw.clone()).map(CategoryId::from))
    }

    /// Apply the supplied fields to `item`.
    ///
    /// # Errors
    /// Returns [`DomainError::NegativePrice`]; `item` is untouched on error.
    pub fn apply(self, item: &mut MenuItem, now: DateTime<Utc>) -> Result<(), DomainError> {
        let price = self.price.map(check_price).transpose()?;
        let category = self.category_change();

        if let Some(name) = non_blank(self.name) {
            item.name = name;
        }
        if let Some(description) = self.description {
            item.description = non_blank(description);
        }
        if let Some(price) = price {
            item.price = price;
        }
        if let Some(category) = category {
            item.category_id = category;
        }
        if let Some(available) = self.is_available {
            item.is_available = available;
        }
        if let Some(featured) = self.is_featured {
            item.is_featured = featured;
        }
        if let Some(order) = self.sort_order {
            item.sort_order = order;
        }
        if let Some(url) = self.image_url {
            item.image_url = non_blank(url);
        }
        item.updated_at = now;
        Ok(())
    }
}

/// Storefront menu filters: a category name (`All` means every category)
/// and free text matched against item name and description.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuQuery {
    pub category: Option<String>,
    pub q: Option<String>,
}

impl MenuQuery {
    #[must_use]
    pub fn matches(&self, listing: &MenuItemListing) -> bool {
        let category_ok = match non_blank(self.category.clone()) {
            None => true,
            Some(name) if name.eq_ignore_ascii_case("all") => true,
            Some(name) => listing
                .category
                .as_ref()
                .is_some_and(|c| c.name == name),
        };

        let search_ok = match non_blank(self.q.clone()) {
            None => true,
            Some(q) => {
                let needle = q.to_lowercase();
                contains_ignore_case(&listing.item.name, &needle)
                    || listing
                        .item
                        .description
                        .as_deref()
                        .is_some_and(|d| contains_ignore_case(d, &needle))
            }
        };

        category_ok && search_ok
    }
}
