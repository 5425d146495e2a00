//! SQLite order store.
//!
//! Orders are read back together with the customer's name and email and the
//! order lines, which is the shape every screen needs.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::SqliteConnection;
use rust_decimal::Decimal;

use super::database::connection::{checkout, DbPool};
use super::database::model::{OrderItemRow, OrderRow};
use super::database::schema::{customers, order_items, orders};
use super::database::value::{count, database_error, decode_decimal, decode_enum, encode_time};
use crate::domain::id::{CustomerId, OrderId};
use crate::domain::money::Money;
use crate::domain::order::{CustomerSummary, Order, OrderDetails, OrderItem, OrderStatus};
use crate::domain::stats::StatusCount;
use crate::error::{Error, Result};
use crate::port::outbound::store::OrderStore;

/// Which orders a read covers.
enum Scope<'a> {
    All,
    One(&'a str),
    Customer(&'a str),
    Recent(i64),
}

type OrderWithCustomer = (OrderRow, Option<String>, Option<String>);

/// SQLite-backed order store.
pub struct SqliteOrderStore {
    pool: DbPool,
}

impl SqliteOrderStore {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn load(conn: &mut SqliteConnection, scope: Scope<'_>) -> Result<Vec<OrderDetails>> {
        let mut query = orders::table
            .left_join(customers::table)
            .select((
                OrderRow::as_select(),
                customers::name.nullable(),
                customers::email.nullable(),
            ))
            .order((orders::created_at.desc(), orders::id.asc()))
            .into_boxed();

        query = match scope {
            Scope::All => query,
            Scope::One(id) => query.filter(orders::id.eq(id)),
            Scope::Customer(id) => query.filter(orders::customer_id.eq(id)),
            Scope::Recent(limit) => query.limit(limit),
        };

        let rows: Vec<OrderWithCustomer> = query.load(conn).map_err(database_error)?;
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<&str> = rows.iter().map(|(order, _, _)| order.id.as_str()).collect();
        let item_rows: Vec<OrderItemRow> = order_items::table
            .filter(order_items::order_id.eq_any(ids))
            .order((order_items::created_at.asc(), order_items::id.asc()))
            .select(OrderItemRow::as_select())
            .load(conn)
            .map_err(database_error)?;

        let mut items_by_order: HashMap<String, Vec<OrderItem>> = HashMap::new();
        for row in item_rows {
            let item = OrderItem::try_from(row)?;
            items_by_order
                .entry(item.order_id.to_string())
                .or_default()
                .push(item);
        }

        rows.into_iter()
            .map(|(order, name, email)| {
                let items = items_by_order.remove(&order.id).unwrap_or_default();
                let customer = match (name, email) {
                    (Some(name), Some(email)) => Some(CustomerSummary { name, email }),
                    _ => None,
                };
                Ok(OrderDetails {
                    order: Order::try_from(order)?,
                    customer,
                    items,
                })
            })
            .collect()
    }
}

#[async_trait]
impl OrderStore for SqliteOrderStore {
    async fn place(&self, order: &Order, items: &[OrderItem]) -> Result<()> {
        let order_row = OrderRow::from(order);
        let item_rows: Vec<OrderItemRow> = items.iter().map(OrderItemRow::from).collect();
        let mut conn = checkout(&self.pool)?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::insert_into(orders::table)
                .values(&order_row)
                .execute(conn)?;
            diesel::insert_into(order_items::table)
                .values(&item_rows)
                .execute(conn)?;
            Ok(())
        })
        .map_err(database_error)
    }

    async fn get(&self, id: &OrderId) -> Result<Option<OrderDetails>> {
        let mut conn = checkout(&self.pool)?;
        let mut found = Self::load(&mut conn, Scope::One(id.as_str()))?;
        Ok(found.pop())
    }

    async fn list(&self) -> Result<Vec<OrderDetails>> {
        let mut conn = checkout(&self.pool)?;
        Self::load(&mut conn, Scope::All)
    }

    async fn recent(&self, limit: usize) -> Result<Vec<OrderDetails>> {
        let limit = i64::try_from(limit).map_err(|e| Error::Parse(e.to_string()))?;
        let mut conn = checkout(&self.pool)?;
        Self::load(&mut conn, Scope::Recent(limit))
    }

    async fn list_for_customer(&self, customer_id: &CustomerId) -> Result<Vec<OrderDetails>> {
        let mut conn = checkout(&self.pool)?;
        Self::load(&mut conn, Scope::Customer(customer_id.as_str()))
    }

    async fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
        now: DateTime<Utc>,
    ) -> Result<bool> {
        let mut conn = checkout(&self.pool)?;
        let updated = diesel::update(orders::table.find(id.as_str()))
            .set((
                orders::status.eq(status.as_str()),
                orders::updated_at.eq(encode_time(now)),
            ))
            .execute(&mut conn)
            .map_err(database_error)?;
        Ok(updated > 0)
    }

    async fn status_counts(&self) -> Result<Vec<StatusCount>> {
        let mut conn = checkout(&self.pool)?;
        let rows: Vec<(String, i64)> = orders::table
            .group_by(orders::status)
            .select((orders::status, diesel::dsl::count_star()))
            .load(&mut conn)
            .map_err(database_error)?;

        let mut counts: HashMap<OrderStatus, u64> = HashMap::new();
        for (raw, total) in rows {
            let status: OrderStatus = decode_enum(&raw)?;
            counts.insert(status, count(total));
        }

        Ok(OrderStatus::ALL
            .into_iter()
            .map(|status| StatusCount {
                status,
                count: counts.get(&status).copied().unwrap_or(0),
            })
            .collect())
    }

    async fn total_revenue(&self) -> Result<Money> {
        let mut conn = checkout(&self.pool)?;
        let totals: Vec<String> = orders::table
            .select(orders::total)
            .load(&mut conn)
            .map_err(database_error)?;

        let mut revenue = Decimal::ZERO;
        for raw in &totals {
            revenue += decode_decimal(raw)?;
        }
        Ok(revenue)
    }
}
