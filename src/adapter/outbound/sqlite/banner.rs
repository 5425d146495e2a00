//! SQLite banner store.

use async_trait::async_trait;
use diesel::prelude::*;

use super::database::connection::{checkout, DbPool};
use super::database::model::BannerRow;
use super::database::schema::banners;
use super::database::value::database_error;
use crate::domain::banner::Banner;
use crate::domain::id::BannerId;
use crate::error::Result;
use crate::port::outbound::store::BannerStore;

/// SQLite-backed banner store.
pub struct SqliteBannerStore {
    pool: DbPool,
}

impl SqliteBannerStore {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BannerStore for SqliteBannerStore {
    async fn list(&self) -> Result<Vec<Banner>> {
        let mut conn = checkout(&self.pool)?;
        let rows: Vec<BannerRow> = banners::table
            .order((banners::sort_order.asc(), banners::created_at.asc()))
            .select(BannerRow::as_select())
            .load(&mut conn)
            .map_err(database_error)?;
        rows.into_iter().map(Banner::try_from).collect()
    }

    async fn get(&self, id: &BannerId) -> Result<Option<Banner>> {
        let mut conn = checkout(&self.pool)?;
        let row: Option<BannerRow> = banners::table
            .find(id.as_str())
            .select(BannerRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(database_error)?;
        row.map(Banner::try_from).transpose()
    }

    async fn insert(&self, banner: &Banner) -> Result<()> {
        let mut conn = checkout(&self.pool)?;
        diesel::insert_into(banners::table)
            .values(BannerRow::from(banner))
            .execute(&mut conn)
            .map_err(database_error)?;
        Ok(())
    }

    async fn update(&self, banner: &Banner) -> Result<bool> {
        let row = BannerRow::from(banner);
        let mut conn = checkout(&self.pool)?;
        let updated = diesel::update(banners::table.find(banner.id.as_str()))
            .set(&row)
            .execute(&mut conn)
            .map_err(database_error)?;
        Ok(updated > 0)
    }

    async fn delete(&self, id: &BannerId) -> Result<bool> {
        let mut conn = checkout(&self.pool)?;
        let deleted = diesel::delete(banners::table.find(id.as_str()))
            .execute(&mut conn)
            .map_err(database_error)?;
        Ok(deleted > 0)
    }
}
