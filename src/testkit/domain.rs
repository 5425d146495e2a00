//! Builders for domain values used across tests.
//!
//! Keeps construction boilerplate out of tests so they focus on assertions.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::domain::cart::CartEntry;
use crate::domain::category::{Category, CategoryDraft};
use crate::domain::customer::{Customer, CustomerDraft};
use crate::domain::menu::{MenuItem, MenuItemDraft};

/// An active food category.
pub fn category(name: &str) -> Category {
    CategoryDraft {
        name: Some(name.to_string()),
        ..CategoryDraft::default()
    }
    .into_category(Utc::now())
    .expect("valid category")
}

/// An available menu item in `category`.
pub fn menu_item(name: &str, price: Decimal, category: &Category) -> MenuItem {
    MenuItemDraft {
        name: Some(name.to_string()),
        price: Some(price),
        category_id: Some(category.id.to_string()),
        ..MenuItemDraft::default()
    }
    .into_item(Utc::now())
    .expect("valid menu item")
}

/// A customer without a password, as created from the admin screen.
pub fn customer(email: &str, name: &str) -> Customer {
    CustomerDraft {
        email: Some(email.to_string()),
        name: Some(name.to_string()),
        ..CustomerDraft::default()
    }
    .into_customer(Utc::now())
    .expect("valid customer")
}

/// A cart entry for `quantity` of `item`.
pub fn entry(item: &MenuItem, quantity: i64) -> CartEntry {
    CartEntry {
        menu_item_id: item.id.clone(),
        quantity,
        special_instructions: None,
    }
}
