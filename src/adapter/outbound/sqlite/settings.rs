//! SQLite settings store: one row holding the settings as JSON.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::database::connection::{checkout, DbPool};
use super::database::model::SettingsRow;
use super::database::schema::restaurant_settings;
use super::database::value::{database_error, encode_time};
use crate::domain::settings::RestaurantSettings;
use crate::error::Result;
use crate::port::outbound::store::SettingsStore;

const SETTINGS_ROW: i32 = 1;

/// SQLite-backed settings store.
pub struct SqliteSettingsStore {
    pool: DbPool,
}

impl SqliteSettingsStore {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsStore for SqliteSettingsStore {
    async fn load(&self) -> Result<Option<RestaurantSettings>> {
        let mut conn = checkout(&self.pool)?;
        let row: Option<SettingsRow> = restaurant_settings::table
            .find(SETTINGS_ROW)
            .select(SettingsRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(database_error)?;

        match row {
            Some(row) => Ok(Some(serde_json::from_str(&row.body)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, settings: &RestaurantSettings, now: DateTime<Utc>) -> Result<()> {
        let row = SettingsRow {
            id: SETTINGS_ROW,
            body: serde_json::to_string(settings)?,
            updated_at: encode_time(now),
        };
        let mut conn = checkout(&self.pool)?;
        diesel::replace_into(restaurant_settings::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(database_error)?;
        Ok(())
    }
}
