//! Orders, their lines, and the kitchen status vocabulary.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cart::Cart;
use super::checkout::{CheckoutQuote, DeliveryDetails};
use super::error::DomainError;
use super::id::{CustomerId, MenuItemId, OrderId, OrderItemId};
use super::money::Money;
use super::text::{contains_ignore_case, non_blank};

/// Where an order is in the kitchen workflow.
///
/// Staff may move an order from any status to any other; the vocabulary is
/// fixed but the transitions are not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Every status, in workflow order.
    pub const ALL: [OrderStatus; 6] = [
        Self::Pending,
        Self::Confirmed,
        Self::Preparing,
        Self::Ready,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Stable name used in storage and JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| DomainError::UnknownOrderStatus(s.to_string()))
    }
}

/// A placed order with its money breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: Option<CustomerId>,
    pub status: OrderStatus,
    pub subtotal: Money,
    pub discount_amount: Money,
    pub tax_amount: Money,
    pub delivery_fee: Money,
    pub total: Money,
    pub coupon_code: Option<String>,
    pub notes: Option<String>,
    pub delivery_address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One line of an order. Prices are captured at order time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub menu_item_id: Option<MenuItemId>,
    pub name: String,
    pub quantity: i32,
    pub unit_price: Money,
    pub total_price: Money,
    pub special_instructions: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Customer fields shown next to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerSummary {
    pub name: String,
    pub email: String,
}

/// An order with its customer and lines, as the orders screen shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDetails {
    #[serde(flatten)]
    pub order: Order,
    pub customer: Option<CustomerSummary>,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Build a pending order and its lines from a priced cart.
    ///
    /// # Errors
    /// Returns [`DomainError::EmptyCart`] if the cart has no lines, or
    /// [`DomainError::InvalidQuantity`] if a line quantity cannot be stored.
    pub fn from_checkout(
        customer_id: Option<CustomerId>,
        cart: &Cart,
        quote: &CheckoutQuote,
        delivery: &DeliveryDetails,
        coupon_code: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<(Order, Vec<OrderItem>), DomainError> {
        if cart.is_empty() {
            return Err(DomainError::EmptyCart);
        }

        let order = Order {
            id: OrderId::new(),
            customer_id,
            status: OrderStatus::Pending,
            subtotal: quote.subtotal,
            discount_amount: quote.discount_amount,
            tax_amount: quote.tax_amount,
            delivery_fee: quote.delivery_fee,
            total: quote.total,
            coupon_code,
            notes: delivery.notes.clone(),
            delivery_address: Some(delivery.full_address()),
            created_at: now,
            updated_at: now,
        };

        let items = cart
            .lines()
            .iter()
            .map(|line| {
                let quantity =
                    i32::try_from(line.quantity).map_err(|_| DomainError::InvalidQuantity {
                        quantity: i64::from(line.quantity),
                    })?;
                Ok(OrderItem {
                    id: OrderItemId::new(),
                    order_id: order.id.clone(),
                    menu_item_id: Some(line.menu_item_id.clone()),
                    name: line.name.clone(),
                    quantity,
                    unit_price: line.unit_price,
                    total_price: line.line_total(),
                    special_instructions: line.special_instructions.clone(),
                    created_at: now,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok((order, items))
    }
}

/// Status-change request body.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusChange {
    pub status: String,
}

/// Which statuses the orders screen shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

/// Orders screen filter: status dropdown plus search box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub status: StatusFilter,
    /// Lowercased search text.
    pub search: Option<String>,
}

impl OrderFilter {
    /// Build a filter from raw query values. `all` or a blank status shows
    /// every order.
    ///
    /// # Errors
    /// Returns [`DomainError::UnknownOrderStatus`] for an unknown status.
    pub fn parse(status: Option<String>, search: Option<String>) -> Result<Self, DomainError> {
        let status = match non_blank(status) {
            None => StatusFilter::All,
            Some(s) if s.eq_ignore_ascii_case("all") => StatusFilter::All,
            Some(s) => StatusFilter::Only(s.parse()?),
        };
        Ok(Self {
            status,
            search: non_blank(search).map(|s| s.to_lowercase()),
        })
    }

    /// Search matches customer name, customer email, or order id.
    #[must_use]
    pub fn matches(&self, details: &OrderDetails) -> bool {
        let status_ok = match self.status {
            StatusFilter::All => true,
            StatusFilter::Only(status) => details.order.status == status,
        };

        let search_ok = match &self.search {
            None => true,
            Some(needle) => {
                details.customer.as_ref().is_some_and(|c| {
                    contains_ignore_case(&c.name, needle) || contains_ignore_case(&c.email, needle)
                }) || contains_ignore_case(details.order.id.as_str(), needle)
            }
        };

        status_ok && search_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn details(status: OrderStatus, customer: Option<(&str, &str)>) -> OrderDetails {
        let now = Utc::now();
        OrderDetails {
            order: Order {
                id: OrderId::from("ord-7f3a"),
                customer_id: None,
                status,
                subtotal: dec!(10),
                discount_amount: dec!(0),
                tax_amount: dec!(0),
                delivery_fee: dec!(5.99),
                total: dec!(15.99),
                coupon_code: None,
                notes: None,
                delivery_address: None,
                created_at: now,
                updated_at: now,
            },
            customer: customer.map(|(name, email)| CustomerSummary {
                name: name.into(),
                email: email.into(),
            }),
            items: Vec::new(),
        }
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Preparing".parse::<OrderStatus>().unwrap(), OrderStatus::Preparing);
        assert!(matches!(
            "on_the_way".parse::<OrderStatus>(),
            Err(DomainError::UnknownOrderStatus(_))
        ));
    }

    #[test]
    fn status_round_trips_through_str() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn filter_all_matches_every_status() {
        let filter = OrderFilter::parse(Some("all".into()), None).unwrap();
        for status in OrderStatus::ALL {
            assert!(filter.matches(&details(status, None)));
        }
    }

    #[test]
    fn filter_by_status() {
        let filter = OrderFilter::parse(Some("ready".into()), None).unwrap();
        assert!(filter.matches(&details(OrderStatus::Ready, None)));
        assert!(!filter.matches(&details(OrderStatus::Pending, None)));
    }

    #[test]
    fn search_covers_customer_and_order_id() {
        let order = details(OrderStatus::Pending, Some(("Ellen Ripley", "ripley@weyland.test")));
        for needle in ["ripley", "WEYLAND", "7F3A"] {
            let filter = OrderFilter::parse(None, Some(needle.into())).unwrap();
            assert!(filter.matches(&order), "{needle}");
        }
        let miss = OrderFilter::parse(None, Some("bishop".into())).unwrap();
        assert!(!miss.matches(&order));
    }

    #[test]
    fn unknown_filter_status_is_an_error() {
        assert!(OrderFilter::parse(Some("lost".into()), None).is_err());
    }
}
