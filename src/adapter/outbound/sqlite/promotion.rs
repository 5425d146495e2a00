//! SQLite promotion store.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;

use super::database::connection::{checkout, DbPool};
use super::database::model::{PromotionItemRow, PromotionRow};
use super::database::schema::{promotion_items, promotions};
use super::database::value::{count, database_error};
use crate::domain::id::PromotionId;
use crate::domain::promotion::{Promotion, PromotionItem, PromotionListing};
use crate::error::Result;
use crate::port::outbound::store::PromotionStore;

/// SQLite-backed promotion store.
pub struct SqlitePromotionStore {
    pool: DbPool,
}

impl SqlitePromotionStore {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PromotionStore for SqlitePromotionStore {
    async fn list(&self) -> Result<Vec<PromotionListing>> {
        let mut conn = checkout(&self.pool)?;
        let rows: Vec<PromotionRow> = promotions::table
            .order((promotions::created_at.desc(), promotions::id.asc()))
            .select(PromotionRow::as_select())
            .load(&mut conn)
            .map_err(database_error)?;
        let link_rows: Vec<PromotionItemRow> = promotion_items::table
            .order(promotion_items::created_at.asc())
            .select(PromotionItemRow::as_select())
            .load(&mut conn)
            .map_err(database_error)?;

        let mut links: HashMap<String, Vec<PromotionItem>> = HashMap::new();
        for row in link_rows {
            let link = PromotionItem::try_from(row)?;
            links
                .entry(link.promotion_id.to_string())
                .or_default()
                .push(link);
        }

        rows.into_iter()
            .map(|row| {
                let promotion_items = links.remove(&row.id).unwrap_or_default();
                Ok(PromotionListing {
                    promotion: Promotion::try_from(row)?,
                    promotion_items,
                })
            })
            .collect()
    }

    async fn get(&self, id: &PromotionId) -> Result<Option<Promotion>> {
        let mut conn = checkout(&self.pool)?;
        let row: Option<PromotionRow> = promotions::table
            .find(id.as_str())
            .select(PromotionRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(database_error)?;
        row.map(Promotion::try_from).transpose()
    }

    async fn insert(&self, promotion: &Promotion) -> Result<()> {
        let mut conn = checkout(&self.pool)?;
        diesel::insert_into(promotions::table)
            .values(PromotionRow::from(promotion))
            .execute(&mut conn)
            .map_err(database_error)?;
        Ok(())
    }

    async fn update(&self, promotion: &Promotion) -> Result<bool> {
        let row = PromotionRow::from(promotion);
        let mut conn = checkout(&self.pool)?;
        let updated = diesel::update(promotions::table.find(promotion.id.as_str()))
            .set(&row)
            .execute(&mut conn)
            .map_err(database_error)?;
        Ok(updated > 0)
    }

    async fn delete(&self, id: &PromotionId) -> Result<bool> {
        let mut conn = checkout(&self.pool)?;
        let deleted = diesel::delete(promotions::table.find(id.as_str()))
            .execute(&mut conn)
            .map_err(database_error)?;
        Ok(deleted > 0)
    }

    async fn replace_items(&self, id: &PromotionId, items: &[PromotionItem]) -> Result<()> {
        let rows: Vec<PromotionItemRow> = items.iter().map(PromotionItemRow::from).collect();
        let mut conn = checkout(&self.pool)?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::delete(promotion_items::table.filter(promotion_items::promotion_id.eq(id.as_str())))
                .execute(conn)?;
            if !rows.is_empty() {
                diesel::insert_into(promotion_items::table)
                    .values(&rows)
                    .execute(conn)?;
            }
            Ok(())
        })
        .map_err(database_error)
    }

    async fn count_active(&self) -> Result<u64> {
        let mut conn = checkout(&self.pool)?;
        let total: i64 = promotions::table
            .filter(promotions::is_active.eq(true))
            .count()
            .get_result(&mut conn)
            .map_err(database_error)?;
        Ok(count(total))
    }
}
