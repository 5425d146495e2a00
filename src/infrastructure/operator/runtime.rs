//! Runtime operator implementation.

use async_trait::async_trait;
use tokio::net::TcpListener;
use tracing::info;

use crate::adapter::inbound::http::router::{router, HttpOptions};
use crate::adapter::inbound::http::server::{serve, shutdown_signal};
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::operator::runtime::{
    MigrationReport, RuntimeOperator, ServeRequest, ServeStartup,
};

use super::entry::Operator;

impl Operator {
    fn load_serve_config(request: &ServeRequest) -> Result<Config> {
        let mut config = Self::load_config(&request.config_toml)?;
        if let Some(host) = &request.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = request.port {
            config.server.port = port;
        }
        Ok(config)
    }
}

#[async_trait]
impl RuntimeOperator for Operator {
    fn prepare_serve(&self, request: &ServeRequest) -> Result<ServeStartup> {
        let config = Self::load_serve_config(request)?;
        Ok(ServeStartup {
            listen: config.server.bind_address(),
            database_path: config.database.path,
            media_root: config.storage.media_root,
        })
    }

    async fn execute_serve(&self, request: ServeRequest) -> Result<()> {
        let config = Self::load_serve_config(&request)?;
        config.init_logging();

        let pool = bootstrap::open_database(&config)?;
        tokio::fs::create_dir_all(&config.storage.media_root).await?;
        let services = bootstrap::build_services(&config, &pool);

        let options = HttpOptions {
            media_root: config.storage.media_root.clone().into(),
            cors_origins: config.server.cors_origins.clone(),
            max_upload_bytes: services.media.policy().max_bytes,
        };
        let app = router(services, &options);

        let listener = TcpListener::bind(config.server.bind_address()).await?;
        info!(address = %config.server.bind_address(), "area51 starting");
        serve(listener, app, shutdown_signal()).await
    }

    fn migrate(&self, config_toml: &str) -> Result<MigrationReport> {
        let config = Self::load_config(config_toml)?;
        config.init_logging();
        let applied = bootstrap::migrate_database(&config)?;
        Ok(MigrationReport {
            database_path: config.database.path,
            applied,
        })
    }
}
