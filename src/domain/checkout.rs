//! Checkout totals and delivery details.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::cart::Cart;
use super::coupon::Coupon;
use super::error::DomainError;
use super::money::{to_cents, Money};
use super::text::non_blank;

/// Delivery and tax rules applied at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutPolicy {
    /// Subtotals strictly above this ship for free.
    pub free_delivery_threshold: Money,
    /// Fee charged when the subtotal does not clear the threshold.
    pub delivery_fee: Money,
    /// Fraction of the discounted subtotal charged as tax (0.0825 = 8.25 %).
    pub tax_rate: Decimal,
}

impl Default for CheckoutPolicy {
    fn default() -> Self {
        Self {
            free_delivery_threshold: Decimal::from(30),
            delivery_fee: Decimal::new(599, 2),
            tax_rate: Decimal::ZERO,
        }
    }
}

/// Money breakdown for a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutQuote {
    pub total_items: u64,
    pub subtotal: Money,
    pub coupon_code: Option<&'static str>,
    pub discount_rate: Decimal,
    pub discount_amount: Money,
    pub delivery_fee: Money,
    pub tax_amount: Money,
    pub total: Money,
}

impl CheckoutPolicy {
    /// Price `cart`, optionally with a coupon.
    #[must_use]
    pub fn quote(&self, cart: &Cart, coupon: Option<&'static Coupon>) -> CheckoutQuote {
        let subtotal = to_cents(cart.total_price());
        let discount_rate = coupon.map_or(Decimal::ZERO, |c| c.rate);
        let discount_amount = to_cents(subtotal * discount_rate);
        let delivery_fee = if subtotal > self.free_delivery_threshold {
            Decimal::ZERO
        } else {
            self.delivery_fee
        };
        let tax_amount = to_cents((subtotal - discount_amount) * self.tax_rate);
        let total = subtotal - discount_amount + tax_amount + delivery_fee;

        CheckoutQuote {
            total_items: cart.total_items(),
            subtotal,
            coupon_code: coupon.map(|c| c.code),
            discount_rate,
            discount_amount,
            delivery_fee,
            tax_amount,
            total,
        }
    }
}

/// Who receives the order and where.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DeliveryDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl DeliveryDetails {
    /// Trim every field and require all but the notes.
    ///
    /// # Errors
    /// Returns `Please fill in all required fields` when one is blank.
    pub fn validate(self) -> Result<Self, DomainError> {
        let details = Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            notes: non_blank(self.notes),
        };
        let required = [
            &details.name,
            &details.email,
            &details.phone,
            &details.address,
            &details.city,
        ];
        if required.iter().any(|field| field.is_empty()) {
            return Err(DomainError::Required("Please fill in all required fields"));
        }
        Ok(details)
    }

    /// Street address and city as a single delivery line.
    #[must_use]
    pub fn full_address(&self) -> String {
        format!("{}, {}", self.address, self.city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::{MenuItem, MenuItemDraft};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn item(price: Money) -> MenuItem {
        MenuItemDraft {
            name: Some("Dish".into()),
            price: Some(price),
            category_id: Some("cat".into()),
            ..Default::default()
        }
        .into_item(Utc::now())
        .unwrap()
    }

    fn cart_of(price: Money, quantity: u32) -> Cart {
        let mut cart = Cart::new();
        cart.add_quantity(&item(price), quantity);
        cart
    }

    #[test]
    fn small_orders_pay_delivery() {
        let quote = CheckoutPolicy::default().quote(&cart_of(dec!(10), 2), None);
        assert_eq!(quote.subtotal, dec!(20));
        assert_eq!(quote.delivery_fee, dec!(5.99));
        assert_eq!(quote.total, dec!(25.99));
    }

    #[test]
    fn delivery_is_free_only_above_threshold() {
        let at = CheckoutPolicy::default().quote(&cart_of(dec!(15), 2), None);
        assert_eq!(at.delivery_fee, dec!(5.99));

        let above = CheckoutPolicy::default().quote(&cart_of(dec!(15.01), 2), None);
        assert_eq!(above.delivery_fee, dec!(0));
        assert_eq!(above.total, dec!(30.02));
    }

    #[test]
    fn coupon_discounts_subtotal_before_delivery() {
        let coupon = Coupon::lookup("AREA51").unwrap();
        let quote = CheckoutPolicy::default().quote(&cart_of(dec!(20), 2), Some(coupon));

        assert_eq!(quote.discount_amount, dec!(10));
        assert_eq!(quote.delivery_fee, dec!(0));
        assert_eq!(quote.total, dec!(30));
        assert_eq!(quote.coupon_code, Some("AREA51"));
    }

    #[test]
    fn tax_applies_after_discount() {
        let policy = CheckoutPolicy {
            tax_rate: dec!(0.10),
            ..CheckoutPolicy::default()
        };
        let coupon = Coupon::lookup("LUNCH").unwrap();
        let quote = policy.quote(&cart_of(dec!(50), 1), Some(coupon));

        assert_eq!(quote.discount_amount, dec!(5));
        assert_eq!(quote.tax_amount, dec!(4.5));
        assert_eq!(quote.total, dec!(49.5));
    }

    #[test]
    fn amounts_are_rounded_to_cents() {
        let coupon = Coupon::lookup("WEEKEND").unwrap();
        let quote = CheckoutPolicy::default().quote(&cart_of(dec!(3.33), 1), Some(coupon));
        assert_eq!(quote.discount_amount, dec!(0.50));
        assert_eq!(quote.total, dec!(8.82));
    }

    #[test]
    fn delivery_details_require_everything_but_notes() {
        let details = DeliveryDetails {
            name: "Parker".into(),
            email: "parker@nostromo.test".into(),
            phone: "555".into(),
            address: "1 Hangar Rd".into(),
            city: " ".into(),
            notes: None,
        };
        assert_eq!(
            details.validate().unwrap_err(),
            DomainError::Required("Please fill in all required fields")
        );
    }

    #[test]
    fn delivery_details_join_address_and_city() {
        let details = DeliveryDetails {
            name: "Lambert".into(),
            email: "lambert@nostromo.test".into(),
            phone: "555".into(),
            address: " 2 Bridge St ".into(),
            city: "Roswell".into(),
            notes: Some(String::new()),
        }
        .validate()
        .unwrap();

        assert_eq!(details.full_address(), "2 Bridge St, Roswell");
        assert!(details.notes.is_none());
    }
}
