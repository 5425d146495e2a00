use area51::adapter::outbound::sqlite::database::connection::DbPool;
use area51::application::state::AppServices;
use area51::infrastructure::bootstrap::{build_services, open_database};
use area51::infrastructure::config::settings::Config;
use area51::testkit;
use tempfile::TempDir;

/// Migrated SQLite database and media directory in a scratch directory that
/// is removed on drop.
pub struct TempDb {
    dir: TempDir,
    config: Config,
    pool: DbPool,
}

impl TempDb {
    pub fn create() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = testkit::config::config(dir.path());
        std::fs::create_dir_all(&config.storage.media_root).expect("create media root");
        let pool = open_database(&config).expect("open database");
        Self { dir, config, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }

    pub fn services(&self) -> AppServices {
        build_services(&self.config, &self.pool)
    }
}
