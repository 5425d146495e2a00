//! Restaurant settings.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::settings::RestaurantSettings;
use crate::error::Result;
use crate::port::outbound::store::SettingsStore;

pub struct SettingsService {
    store: Arc<dyn SettingsStore>,
}

impl SettingsService {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// Saved settings, or the defaults if nothing was saved yet.
    pub async fn get(&self) -> Result<RestaurantSettings> {
        Ok(self.store.load().await?.unwrap_or_default())
    }

    pub async fn update(&self, settings: RestaurantSettings) -> Result<RestaurantSettings> {
        settings.validate()?;
        self.store.save(&settings, Utc::now()).await?;
        info!(name = %settings.name, "settings saved");
        Ok(settings)
    }
}
