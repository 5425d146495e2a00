//! Checkout and order management.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::cart::{checked_quantity, Cart, CartEntry, MAX_LINE_QUANTITY};
use crate::domain::checkout::{CheckoutPolicy, CheckoutQuote, DeliveryDetails};
use crate::domain::coupon::Coupon;
use crate::domain::customer::Customer;
use crate::domain::error::DomainError;
use crate::domain::id::{MenuItemId, OrderId};
use crate::domain::menu::MenuItem;
use crate::domain::order::{Order, OrderDetails, OrderFilter, OrderStatus, StatusChange};
use crate::domain::text::non_blank;
use crate::error::{Error, Result};
use crate::port::outbound::store::{MenuItemStore, OrderStore};

/// Cart lines and an optional coupon, as sent for a quote.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub items: Vec<CartEntry>,
    #[serde(default)]
    pub coupon_code: Option<String>,
}

/// Everything the storefront submits to place an order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutRequest {
    #[serde(flatten)]
    pub cart: QuoteRequest,
    #[serde(default)]
    pub delivery: DeliveryDetails,
}

pub struct OrderService {
    orders: Arc<dyn OrderStore>,
    items: Arc<dyn MenuItemStore>,
    policy: CheckoutPolicy,
}

impl OrderService {
    pub fn new(
        orders: Arc<dyn OrderStore>,
        items: Arc<dyn MenuItemStore>,
        policy: CheckoutPolicy,
    ) -> Self {
        Self {
            orders,
            items,
            policy,
        }
    }

    #[must_use]
    pub fn policy(&self) -> &CheckoutPolicy {
        &self.policy
    }

    /// Orders newest first, narrowed by `filter`.
    pub async fn list(&self, filter: &OrderFilter) -> Result<Vec<OrderDetails>> {
        let orders = self.orders.list().await?;
        Ok(orders.into_iter().filter(|o| filter.matches(o)).collect())
    }

    pub async fn get(&self, id: &OrderId) -> Result<OrderDetails> {
        self.orders
            .get(id)
            .await?
            .ok_or_else(|| Error::not_found("order", id))
    }

    /// Move an order to any status in the vocabulary.
    pub async fn update_status(&self, id: &OrderId, change: StatusChange) -> Result<OrderDetails> {
        let status: OrderStatus = change.status.trim().parse()?;
        if !self.orders.update_status(id, status, Utc::now()).await? {
            return Err(Error::not_found("order", id));
        }
        info!(order_id = %id, status = %status, "order status changed");
        self.get(id).await
    }

    /// Orders placed by one customer, newest first.
    pub async fn history(&self, customer: &Customer) -> Result<Vec<OrderDetails>> {
        self.orders.list_for_customer(&customer.id).await
    }

    /// Price a cart with current menu prices and an optional coupon.
    pub async fn quote(&self, request: &QuoteRequest) -> Result<CheckoutQuote> {
        let cart = self.price_cart(&request.items).await?;
        let coupon = lookup_coupon(request.coupon_code.as_deref())?;
        Ok(self.policy.quote(&cart, coupon))
    }

    /// Re-price the cart, validate delivery details and record a pending
    /// order for `customer`.
    ///
    /// # Errors
    /// Returns [`DomainError::EmptyCart`], an unavailable-item or quantity
    /// error, a coupon error, or missing delivery fields.
    pub async fn place(&self, customer: &Customer, request: CheckoutRequest) -> Result<OrderDetails> {
        let delivery = request.delivery.validate()?;
        let cart = self.price_cart(&request.cart.items).await?;
        let coupon = lookup_coupon(request.cart.coupon_code.as_deref())?;
        let quote = self.policy.quote(&cart, coupon);

        let (order, items) = Order::from_checkout(
            Some(customer.id.clone()),
            &cart,
            &quote,
            &delivery,
            coupon.map(|c| c.code.to_string()),
            Utc::now(),
        )?;
        self.orders.place(&order, &items).await?;
        info!(
            order_id = %order.id,
            customer_id = %customer.id,
            total = %order.total,
            lines = items.len(),
            "order placed"
        );
        self.get(&order.id).await
    }

    /// Rebuild a cart from client lines using catalog prices.
    async fn price_cart(&self, entries: &[CartEntry]) -> Result<Cart> {
        if entries.is_empty() {
            return Err(DomainError::EmptyCart.into());
        }

        let ids: Vec<MenuItemId> = entries.iter().map(|e| e.menu_item_id.clone()).collect();
        let catalog: HashMap<MenuItemId, MenuItem> = self
            .items
            .get_many(&ids)
            .await?
            .into_iter()
            .map(|item| (item.id.clone(), item))
            .collect();

        let mut cart = Cart::new();
        for entry in entries {
            let quantity = checked_quantity(entry.quantity)?;
            let item = match catalog.get(&entry.menu_item_id) {
                Some(item) if item.is_available => item,
                Some(item) => {
                    return Err(DomainError::UnavailableItem {
                        name: item.name.clone(),
                    }
                    .into())
                }
                None => {
                    warn!(item_id = %entry.menu_item_id, "cart references unknown item");
                    return Err(DomainError::UnavailableItem {
                        name: entry.menu_item_id.to_string(),
                    }
                    .into());
                }
            };
            cart.add_quantity(item, quantity);
            if let Some(notes) = non_blank(entry.special_instructions.clone()) {
                cart.set_instructions(&item.id, Some(notes));
            }
        }
        if let Some(line) = cart.lines().iter().find(|l| l.quantity > MAX_LINE_QUANTITY) {
            return Err(DomainError::InvalidQuantity {
                quantity: i64::from(line.quantity),
            }
            .into());
        }
        Ok(cart)
    }
}

fn lookup_coupon(code: Option<&str>) -> Result<Option<&'static Coupon>> {
    match code.map(str::trim).filter(|c| !c.is_empty()) {
        Some(code) => Ok(Some(Coupon::lookup(code)?)),
        None => Ok(None),
    }
}
