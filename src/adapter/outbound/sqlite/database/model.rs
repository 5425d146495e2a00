//! Database model types for Diesel ORM.
//!
//! Each row mirrors its table column for column. Conversions to and from the
//! domain types live next to the rows so stores only deal in domain values.

use diesel::prelude::*;

use super::schema::{
    admin_users, banners, categories, customers, menu_items, order_items, orders,
    promotion_items, promotions, restaurant_settings, roles,
};
use super::value::{decode_decimal, decode_enum, decode_optional_time, decode_time, encode_time};
use crate::domain::banner::Banner;
use crate::domain::category::Category;
use crate::domain::customer::Customer;
use crate::domain::id::{
    AdminUserId, BannerId, CategoryId, CustomerId, MenuItemId, OrderId, OrderItemId, PromotionId,
    PromotionItemId, RoleId,
};
use crate::domain::menu::MenuItem;
use crate::domain::order::{Order, OrderItem};
use crate::domain::promotion::{Promotion, PromotionItem};
use crate::domain::staff::{AdminUser, Role};
use crate::error::{Error, Result};

#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = roles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RoleRow {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
}

impl From<&Role> for RoleRow {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id.to_string(),
            name: role.name.clone(),
            description: role.description.clone(),
            created_at: encode_time(role.created_at),
        }
    }
}

impl TryFrom<RoleRow> for Role {
    type Error = Error;

    fn try_from(row: RoleRow) -> Result<Self> {
        Ok(Self {
            id: RoleId::from(row.id),
            name: row.name,
            description: row.description,
            created_at: decode_time(&row.created_at)?,
        })
    }
}

#[derive(Queryable, Selectable, Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = admin_users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct AdminUserRow {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role_id: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&AdminUser> for AdminUserRow {
    fn from(user: &AdminUser) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            name: user.name.clone(),
            role_id: user.role_id.as_ref().map(ToString::to_string),
            is_active: user.is_active,
            created_at: encode_time(user.created_at),
            updated_at: encode_time(user.updated_at),
        }
    }
}

impl TryFrom<AdminUserRow> for AdminUser {
    type Error = Error;

    fn try_from(row: AdminUserRow) -> Result<Self> {
        Ok(Self {
            id: AdminUserId::from(row.id),
            email: row.email,
            password_hash: row.password_hash,
            name: row.name,
            role_id: row.role_id.map(RoleId::from),
            is_active: row.is_active,
            created_at: decode_time(&row.created_at)?,
            updated_at: decode_time(&row.updated_at)?,
        })
    }
}

#[derive(Queryable, Selectable, Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct CustomerRow {
    pub id: String,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub password_hash: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Customer> for CustomerRow {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id.to_string(),
            email: customer.email.clone(),
            name: customer.name.clone(),
            phone: customer.phone.clone(),
            address: customer.address.clone(),
            password_hash: customer.password_hash.clone(),
            created_at: encode_time(customer.created_at),
            updated_at: encode_time(customer.updated_at),
        }
    }
}

impl TryFrom<CustomerRow> for Customer {
    type Error = Error;

    fn try_from(row: CustomerRow) -> Result<Self> {
        Ok(Self {
            id: CustomerId::from(row.id),
            email: row.email,
            name: row.name,
            phone: row.phone,
            address: row.address,
            password_hash: row.password_hash,
            created_at: decode_time(&row.created_at)?,
            updated_at: decode_time(&row.updated_at)?,
        })
    }
}

#[derive(Queryable, Selectable, Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct CategoryRow {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub kind: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Category> for CategoryRow {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name.clone(),
            description: category.description.clone(),
            kind: category.kind.as_str().to_string(),
            sort_order: category.sort_order,
            is_active: category.is_active,
            created_at: encode_time(category.created_at),
            updated_at: encode_time(category.updated_at),
        }
    }
}

impl TryFrom<CategoryRow> for Category {
    type Error = Error;

    fn try_from(row: CategoryRow) -> Result<Self> {
        Ok(Self {
            id: CategoryId::from(row.id),
            name: row.name,
            description: row.description,
            kind: decode_enum(&row.kind)?,
            sort_order: row.sort_order,
            is_active: row.is_active,
            created_at: decode_time(&row.created_at)?,
            updated_at: decode_time(&row.updated_at)?,
        })
    }
}

#[derive(Queryable, Selectable, Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = menu_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct MenuItemRow {
    pub id: String,
    pub category_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub is_featured: bool,
    pub sort_order: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&MenuItem> for MenuItemRow {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id.to_string(),
            category_id: item.category_id.as_ref().map(ToString::to_string),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.to_string(),
            image_url: item.image_url.clone(),
            is_available: item.is_available,
            is_featured: item.is_featured,
            sort_order: item.sort_order,
            created_at: encode_time(item.created_at),
            updated_at: encode_time(item.updated_at),
        }
    }
}

impl TryFrom<MenuItemRow> for MenuItem {
    type Error = Error;

    fn try_from(row: MenuItemRow) -> Result<Self> {
        Ok(Self {
            id: MenuItemId::from(row.id),
            category_id: row.category_id.map(CategoryId::from),
            name: row.name,
            description: row.description,
            price: decode_decimal(&row.price)?,
            image_url: row.image_url,
            is_available: row.is_available,
            is_featured: row.is_featured,
            sort_order: row.sort_order,
            created_at: decode_time(&row.created_at)?,
            updated_at: decode_time(&row.updated_at)?,
        })
    }
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OrderRow {
    pub id: String,
    pub customer_id: Option<String>,
    pub status: String,
    pub subtotal: String,
    pub discount_amount: String,
    pub tax_amount: String,
    pub delivery_fee: String,
    pub total: String,
    pub coupon_code: Option<String>,
    pub notes: Option<String>,
    pub delivery_address: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            customer_id: order.customer_id.as_ref().map(ToString::to_string),
            status: order.status.as_str().to_string(),
            subtotal: order.subtotal.to_string(),
            discount_amount: order.discount_amount.to_string(),
            tax_amount: order.tax_amount.to_string(),
            delivery_fee: order.delivery_fee.to_string(),
            total: order.total.to_string(),
            coupon_code: order.coupon_code.clone(),
            notes: order.notes.clone(),
            delivery_address: order.delivery_address.clone(),
            created_at: encode_time(order.created_at),
            updated_at: encode_time(order.updated_at),
        }
    }
}

impl TryFrom<OrderRow> for Order {
    type Error = Error;

    fn try_from(row: OrderRow) -> Result<Self> {
        Ok(Self {
            id: OrderId::from(row.id),
            customer_id: row.customer_id.map(CustomerId::from),
            status: decode_enum(&row.status)?,
            subtotal: decode_decimal(&row.subtotal)?,
            discount_amount: decode_decimal(&row.discount_amount)?,
            tax_amount: decode_decimal(&row.tax_amount)?,
            delivery_fee: decode_decimal(&row.delivery_fee)?,
            total: decode_decimal(&row.total)?,
            coupon_code: row.coupon_code,
            notes: row.notes,
            delivery_address: row.delivery_address,
            created_at: decode_time(&row.created_at)?,
            updated_at: decode_time(&row.updated_at)?,
        })
    }
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = order_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OrderItemRow {
    pub id: String,
    pub order_id: String,
    pub menu_item_id: Option<String>,
    pub name: String,
    pub quantity: i32,
    pub unit_price: String,
    pub total_price: String,
    pub special_instructions: Option<String>,
    pub created_at: String,
}

impl From<&OrderItem> for OrderItemRow {
    fn from(item: &OrderItem) -> Self {
        Self {
            id: item.id.to_string(),
            order_id: item.order_id.to_string(),
            menu_item_id: item.menu_item_id.as_ref().map(ToString::to_string),
            name: item.name.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price.to_string(),
            total_price: item.total_price.to_string(),
            special_instructions: item.special_instructions.clone(),
            created_at: encode_time(item.created_at),
        }
    }
}

impl TryFrom<OrderItemRow> for OrderItem {
    type Error = Error;

    fn try_from(row: OrderItemRow) -> Result<Self> {
        Ok(Self {
            id: OrderItemId::from(row.id),
            order_id: OrderId::from(row.order_id),
            menu_item_id: row.menu_item_id.map(MenuItemId::from),
            name: row.name,
            quantity: row.quantity,
            unit_price: decode_decimal(&row.unit_price)?,
            total_price: decode_decimal(&row.total_price)?,
            special_instructions: row.special_instructions,
            created_at: decode_time(&row.created_at)?,
        })
    }
}

#[derive(Queryable, Selectable, Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = promotions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct PromotionRow {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub kind: String,
    pub value: String,
    pub min_order_amount: String,
    pub is_active: bool,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Promotion> for PromotionRow {
    fn from(promotion: &Promotion) -> Self {
        Self {
            id: promotion.id.to_string(),
            name: promotion.name.clone(),
            description: promotion.description.clone(),
            kind: promotion.kind.as_str().to_string(),
            value: promotion.value.to_string(),
            min_order_amount: promotion.min_order_amount.to_string(),
            is_active: promotion.is_active,
            start_date: promotion.start_date.map(encode_time),
            end_date: promotion.end_date.map(encode_time),
            created_at: encode_time(promotion.created_at),
            updated_at: encode_time(promotion.updated_at),
        }
    }
}

impl TryFrom<PromotionRow> for Promotion {
    type Error = Error;

    fn try_from(row: PromotionRow) -> Result<Self> {
        Ok(Self {
            id: PromotionId::from(row.id),
            name: row.name,
            description: row.description,
            kind: decode_enum(&row.kind)?,
            value: decode_decimal(&row.value)?,
            min_order_amount: decode_decimal(&row.min_order_amount)?,
            is_active: row.is_active,
            start_date: decode_optional_time(row.start_date)?,
            end_date: decode_optional_time(row.end_date)?,
            created_at: decode_time(&row.created_at)?,
            updated_at: decode_time(&row.updated_at)?,
        })
    }
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = promotion_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PromotionItemRow {
    pub id: String,
    pub promotion_id: String,
    pub menu_item_id: String,
    pub created_at: String,
}

impl From<&PromotionItem> for PromotionItemRow {
    fn from(link: &PromotionItem) -> Self {
        Self {
            id: link.id.to_string(),
            promotion_id: link.promotion_id.to_string(),
            menu_item_id: link.menu_item_id.to_string(),
            created_at: encode_time(link.created_at),
        }
    }
}

impl TryFrom<PromotionItemRow> for PromotionItem {
    type Error = Error;

    fn try_from(row: PromotionItemRow) -> Result<Self> {
        Ok(Self {
            id: PromotionItemId::from(row.id),
            promotion_id: PromotionId::from(row.promotion_id),
            menu_item_id: MenuItemId::from(row.menu_item_id),
            created_at: decode_time(&row.created_at)?,
        })
    }
}

#[derive(Queryable, Selectable, Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = banners)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct BannerRow {
    pub id: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: String,
    pub link_url: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Banner> for BannerRow {
    fn from(banner: &Banner) -> Self {
        Self {
            id: banner.id.to_string(),
            title: banner.title.clone(),
            subtitle: banner.subtitle.clone(),
            image_url: banner.image_url.clone(),
            link_url: banner.link_url.clone(),
            is_active: banner.is_active,
            sort_order: banner.sort_order,
            created_at: encode_time(banner.created_at),
            updated_at: encode_time(banner.updated_at),
        }
    }
}

impl TryFrom<BannerRow> for Banner {
    type Error = Error;

    fn try_from(row: BannerRow) -> Result<Self> {
        Ok(Self {
            id: BannerId::from(row.id),
            title: row.title,
            subtitle: row.subtitle,
            image_url: row.image_url,
            link_url: row.link_url,
            is_active: row.is_active,
            sort_order: row.sort_order,
            created_at: decode_time(&row.created_at)?,
            updated_at: decode_time(&row.updated_at)?,
        })
    }
}

/// The single settings row; `body` holds the settings as JSON.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = restaurant_settings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SettingsRow {
    pub id: i32,
    pub body: String,
    pub updated_at: String,
}
