//! Shopping cart arithmetic.
//!
//! The storefront keeps the cart on the client. The server rebuilds a
//! [`Cart`] from the submitted lines, with prices looked up from the menu,
//! whenever it needs totals.

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::MenuItemId;
use super::menu::MenuItem;
use super::money::Money;

/// Largest quantity one cart line may hold at checkout.
pub const MAX_LINE_QUANTITY: u32 = 999;

/// Accept a submitted line quantity in `1..=MAX_LINE_QUANTITY`.
///
/// # Errors
/// Returns [`DomainError::InvalidQuantity`] for anything outside that range.
pub fn checked_quantity(quantity: i64) -> Result<u32, DomainError> {
    u32::try_from(quantity)
        .ok()
        .filter(|q| (1..=MAX_LINE_QUANTITY).contains(q))
        .ok_or(DomainError::InvalidQuantity { quantity })
}

/// One distinct menu item in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub menu_item_id: MenuItemId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub special_instructions: Option<String>,
}

impl CartLine {
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price * Money::from(self.quantity)
    }
}

/// Cart line as submitted by a client: an item reference and a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CartEntry {
    pub menu_item_id: MenuItemId,
    pub quantity: i64,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

/// An ordered set of cart lines, at most one per menu item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one of `item`, merging with an existing line.
    pub fn add(&mut self, item: &MenuItem) {
        self.add_quantity(item, 1);
    }

    /// Add `quantity` of `item`, merging with an existing line.
    pub fn add_quantity(&mut self, item: &MenuItem, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.menu_item_id == item.id) {
            line.quantity = line.quantity.saturating_add(quantity);
            return;
        }
        self.lines.push(CartLine {
            menu_item_id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.price,
            quantity,
            special_instructions: None,
        });
    }

    /// Attach kitchen notes to a line.
    pub fn set_instructions(&mut self, id: &MenuItemId, instructions: Option<String>) {
        if let Some(line) = self.lines.iter_mut().find(|l| &l.menu_item_id == id) {
            line.special_instructions = instructions;
        }
    }

    pub fn remove(&mut self, id: &MenuItemId) {
        self.lines.retain(|l| &l.menu_item_id != id);
    }

    /// Set a line's quantity; zero or less removes the line.
    pub fn update_quantity(&mut self, id: &MenuItemId, quantity: i64) {
        let Ok(quantity) = u32::try_from(quantity) else {
            if quantity <= 0 {
                self.remove(id);
            }
            return;
        };
        if quantity == 0 {
            self.remove(id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| &l.menu_item_id == id) {
            line.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Number of units across all lines.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of price × quantity across all lines.
    #[must_use]
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::MenuItemDraft;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn item(name: &str, price: Money) -> MenuItem {
        MenuItemDraft {
            name: Some(name.into()),
            price: Some(price),
            category_id: Some("cat".into()),
            ..Default::default()
        }
        .into_item(Utc::now())
        .unwrap()
    }

    #[test]
    fn adding_same_item_merges_lines() {
        let burger = item("Burger", dec!(10));
        let mut cart = Cart::new();
        cart.add(&burger);
        cart.add(&burger);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price(), dec!(20));
    }

    #[test]
    fn totals_cover_every_line() {
        let mut cart = Cart::new();
        cart.add_quantity(&item("Fries", dec!(3.50)), 3);
        cart.add(&item("Shake", dec!(4.25)));

        assert_eq!(cart.total_items(), 4);
        assert_eq!(cart.total_price(), dec!(14.75));
    }

    #[test]
    fn updating_quantity_to_zero_or_less_removes_line() {
        let fries = item("Fries", dec!(3));
        let shake = item("Shake", dec!(4));
        let mut cart = Cart::new();
        cart.add(&fries);
        cart.add(&shake);

        cart.update_quantity(&fries.id, 5);
        assert_eq!(cart.total_items(), 6);

        cart.update_quantity(&fries.id, 0);
        cart.update_quantity(&shake.id, -2);
        assert!(cart.is_empty());
    }

    #[test]
    fn updating_unknown_item_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add(&item("Fries", dec!(3)));
        cart.update_quantity(&MenuItemId::from("missing"), 4);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn remove_and_clear() {
        let fries = item("Fries", dec!(3));
        let mut cart = Cart::new();
        cart.add(&fries);
        cart.add(&item("Soda", dec!(2)));

        cart.remove(&fries.id);
        assert_eq!(cart.lines().len(), 1);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), dec!(0));
    }

    #[test]
    fn checked_quantity_accepts_only_the_line_range() {
        assert_eq!(checked_quantity(1).unwrap(), 1);
        assert_eq!(checked_quantity(999).unwrap(), MAX_LINE_QUANTITY);
        for bad in [0, -3, 1000, 3_000_000_000] {
            assert_eq!(
                checked_quantity(bad).unwrap_err(),
                DomainError::InvalidQuantity { quantity: bad }
            );
        }
    }
}
