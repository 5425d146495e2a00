//! Composition root: open the database and wire adapters into services.

use std::sync::Arc;

use chrono::Duration;
use tracing::info;

use crate::adapter::outbound::credential::BcryptHasher;
use crate::adapter::outbound::sqlite::banner::SqliteBannerStore;
use crate::adapter::outbound::sqlite::catalog::{SqliteCategoryStore, SqliteMenuItemStore};
use crate::adapter::outbound::sqlite::customer::SqliteCustomerStore;
use crate::adapter::outbound::sqlite::database::connection::{
    create_pool, run_migrations, DbPool,
};
use crate::adapter::outbound::sqlite::order::SqliteOrderStore;
use crate::adapter::outbound::sqlite::promotion::SqlitePromotionStore;
use crate::adapter::outbound::sqlite::settings::SqliteSettingsStore;
use crate::adapter::outbound::sqlite::staff::{SqliteAdminUserStore, SqliteRoleStore};
use crate::adapter::outbound::storage::LocalMediaStore;
use crate::application::session::SessionSigner;
use crate::application::state::{AppServices, Policies, Stores};
use crate::domain::media::UploadPolicy;
use crate::domain::password::PasswordPolicy;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Open the configured database and bring its schema up to date.
///
/// # Errors
/// Returns an error if the pool cannot be built or a migration fails.
pub fn open_database(config: &Config) -> Result<DbPool> {
    let pool = create_pool(&config.database.path, config.database.pool_size)?;
    let applied = run_migrations(&pool)?;
    info!(path = %config.database.path, applied, "database ready");
    Ok(pool)
}

/// Apply pending migrations and return how many ran.
///
/// # Errors
/// Returns an error if the pool cannot be built or a migration fails.
pub fn migrate_database(config: &Config) -> Result<usize> {
    let pool = create_pool(&config.database.path, 1)?;
    run_migrations(&pool)
}

/// SQLite stores, filesystem media and bcrypt hashing.
#[must_use]
pub fn build_stores(config: &Config, pool: &DbPool) -> Stores {
    Stores {
        roles: Arc::new(SqliteRoleStore::new(pool.clone())),
        admin_users: Arc::new(SqliteAdminUserStore::new(pool.clone())),
        customers: Arc::new(SqliteCustomerStore::new(pool.clone())),
        categories: Arc::new(SqliteCategoryStore::new(pool.clone())),
        menu_items: Arc::new(SqliteMenuItemStore::new(pool.clone())),
        orders: Arc::new(SqliteOrderStore::new(pool.clone())),
        promotions: Arc::new(SqlitePromotionStore::new(pool.clone())),
        banners: Arc::new(SqliteBannerStore::new(pool.clone())),
        settings: Arc::new(SqliteSettingsStore::new(pool.clone())),
        media: Arc::new(LocalMediaStore::new(
            &config.storage.media_root,
            config.storage.public_base_url.as_str(),
        )),
        hasher: Arc::new(BcryptHasher::new(config.auth.bcrypt_cost)),
    }
}

#[must_use]
pub fn build_policies(config: &Config) -> Policies {
    Policies {
        signer: SessionSigner::new(
            config.token_secret().as_bytes().to_vec(),
            Duration::hours(i64::from(config.auth.session_ttl_hours)),
        ),
        checkout: config.checkout.policy(),
        upload: UploadPolicy::with_limit_mb(config.storage.max_upload_mb),
        password: PasswordPolicy::default(),
    }
}

/// Everything needed to serve requests against `pool`.
#[must_use]
pub fn build_services(config: &Config, pool: &DbPool) -> AppServices {
    AppServices::new(build_stores(config, pool), build_policies(config))
}
