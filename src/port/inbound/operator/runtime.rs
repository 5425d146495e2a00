//! Runtime control projection types for operator-facing adapters.

use async_trait::async_trait;

use crate::error::Result;

/// Server overrides from CLI flags, applied over the configuration file.
#[derive(Debug, Clone)]
pub struct ServeRequest {
    /// Raw TOML configuration content.
    pub config_toml: String,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Resolved values shown before the server starts.
#[derive(Debug, Clone)]
pub struct ServeStartup {
    pub listen: String,
    pub database_path: String,
    pub media_root: String,
}

/// Outcome of `migrate`.
#[derive(Debug, Clone)]
pub struct MigrationReport {
    pub database_path: String,
    /// Migrations applied by this run; zero when the schema was current.
    pub applied: usize,
}

/// Runtime control use-cases for operator-facing adapters.
#[async_trait]
pub trait RuntimeOperator: Send + Sync {
    /// Resolve the startup snapshot without opening anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    fn prepare_serve(&self, request: &ServeRequest) -> Result<ServeStartup>;

    /// Migrate, bind and serve until a shutdown signal arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if the database, listener or server fails.
    async fn execute_serve(&self, request: ServeRequest) -> Result<()>;

    /// Apply pending migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or a migration fails.
    fn migrate(&self, config_toml: &str) -> Result<MigrationReport>;
}
