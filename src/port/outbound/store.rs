//! Persistence ports for every table the restaurant owns.
//!
//! Each store is object-safe so services can hold `Arc<dyn ...>` and tests
//! can swap the SQLite adapter for a fake.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::banner::Banner;
use crate::domain::category::Category;
use crate::domain::customer::Customer;
use crate::domain::id::{
    AdminUserId, BannerId, CategoryId, CustomerId, MenuItemId, OrderId, PromotionId, RoleId,
};
use crate::domain::menu::{MenuItem, MenuItemListing};
use crate::domain::money::Money;
use crate::domain::order::{Order, OrderDetails, OrderItem, OrderStatus};
use crate::domain::promotion::{Promotion, PromotionItem, PromotionListing};
use crate::domain::settings::RestaurantSettings;
use crate::domain::staff::{AdminUser, AdminUserListing, Role};
use crate::domain::stats::StatusCount;
use crate::error::Result;

#[async_trait]
pub trait RoleStore: Send + Sync {
    /// All roles, by name.
    async fn list(&self) -> Result<Vec<Role>>;

    async fn get(&self, id: &RoleId) -> Result<Option<Role>>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Role>>;

    async fn insert(&self, role: &Role) -> Result<()>;
}

#[async_trait]
pub trait AdminUserStore: Send + Sync {
    /// All dashboard accounts with their role, newest first.
    async fn list(&self) -> Result<Vec<AdminUserListing>>;

    async fn get(&self, id: &AdminUserId) -> Result<Option<AdminUser>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>>;

    /// Insert a new account. A duplicate email is a conflict.
    async fn insert(&self, user: &AdminUser) -> Result<()>;

    /// Overwrite an existing account. Returns false if it does not exist.
    async fn update(&self, user: &AdminUser) -> Result<bool>;

    async fn delete(&self, id: &AdminUserId) -> Result<bool>;
}

#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// All customers, newest first.
    async fn list(&self) -> Result<Vec<Customer>>;

    async fn get(&self, id: &CustomerId) -> Result<Option<Customer>>;

    /// Lookup by email, ignoring case.
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>>;

    async fn insert(&self, customer: &Customer) -> Result<()>;

    async fn update(&self, customer: &Customer) -> Result<bool>;

    async fn delete(&self, id: &CustomerId) -> Result<bool>;

    async fn count(&self) -> Result<u64>;
}

#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// All categories by sort order, then name.
    async fn list(&self) -> Result<Vec<Category>>;

    async fn get(&self, id: &CategoryId) -> Result<Option<Category>>;

    async fn insert(&self, category: &Category) -> Result<()>;

    async fn update(&self, category: &Category) -> Result<bool>;

    /// Delete a category. Items in it keep existing without a category.
    async fn delete(&self, id: &CategoryId) -> Result<bool>;
}

#[async_trait]
pub trait MenuItemStore: Send + Sync {
    /// All items with their category, newest first.
    async fn list(&self) -> Result<Vec<MenuItemListing>>;

    async fn get(&self, id: &MenuItemId) -> Result<Option<MenuItem>>;

    /// Fetch several items at once. Unknown ids are skipped.
    async fn get_many(&self, ids: &[MenuItemId]) -> Result<Vec<MenuItem>>;

    async fn insert(&self, item: &MenuItem) -> Result<()>;

    async fn update(&self, item: &MenuItem) -> Result<bool>;

    async fn delete(&self, id: &MenuItemId) -> Result<bool>;

    async fn count(&self) -> Result<u64>;
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Insert an order and its lines in one transaction.
    async fn place(&self, order: &Order, items: &[OrderItem]) -> Result<()>;

    async fn get(&self, id: &OrderId) -> Result<Option<OrderDetails>>;

    /// Every order with customer and lines, newest first.
    async fn list(&self) -> Result<Vec<OrderDetails>>;

    /// The `limit` most recent orders.
    async fn recent(&self, limit: usize) -> Result<Vec<OrderDetails>>;

    async fn list_for_customer(&self, customer_id: &CustomerId) -> Result<Vec<OrderDetails>>;

    /// Set the status of an order. Returns false if it does not exist.
    async fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
        now: DateTime<Utc>,
    ) -> Result<bool>;

    /// Order count per status, including empty buckets.
    async fn status_counts(&self) -> Result<Vec<StatusCount>>;

    /// Sum of every order total.
    async fn total_revenue(&self) -> Result<Money>;
}

#[async_trait]
pub trait PromotionStore: Send + Sync {
    /// All promotions with their linked items, newest first.
    async fn list(&self) -> Result<Vec<PromotionListing>>;

    async fn get(&self, id: &PromotionId) -> Result<Option<Promotion>>;

    async fn insert(&self, promotion: &Promotion) -> Result<()>;

    async fn update(&self, promotion: &Promotion) -> Result<bool>;

    /// Delete a promotion and its item links.
    async fn delete(&self, id: &PromotionId) -> Result<bool>;

    /// Replace the item links of a promotion in one transaction.
    async fn replace_items(&self, id: &PromotionId, items: &[PromotionItem]) -> Result<()>;

    async fn count_active(&self) -> Result<u64>;
}

#[async_trait]
pub trait BannerStore: Send + Sync {
    /// All banners by sort order.
    async fn list(&self) -> Result<Vec<Banner>>;

    async fn get(&self, id: &BannerId) -> Result<Option<Banner>>;

    async fn insert(&self, banner: &Banner) -> Result<()>;

    async fn update(&self, banner: &Banner) -> Result<bool>;

    async fn delete(&self, id: &BannerId) -> Result<bool>;
}

#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// The saved settings, or `None` if they were never saved.
    async fn load(&self) -> Result<Option<RestaurantSettings>>;

    async fn save(&self, settings: &RestaurantSettings, now: DateTime<Utc>) -> Result<()>;
}
