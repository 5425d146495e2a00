//! Database connection management using Diesel ORM.
//!
//! Provides connection pooling, migration support, and connection
//! configuration for SQLite databases.

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded database migrations compiled from the migrations/ directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Type alias for a SQLite connection pool.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// A connection checked out of [`DbPool`].
pub type DbConn = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Applies [`configure_sqlite_connection`] to every pooled connection.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> std::result::Result<(), diesel::r2d2::Error> {
        apply_pragmas(conn).map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create a connection pool for the given database URL.
///
/// # Errors
/// Returns an error if the pool cannot be created.
pub fn create_pool(database_url: &str, max_size: u32) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)
        .map_err(|e| Error::Connection(e.to_string()))?;
    debug!(database_url, max_size, "database pool ready");
    Ok(pool)
}

/// Check a connection out of the pool.
///
/// # Errors
/// Returns [`Error::Connection`] when the pool times out.
pub fn checkout(pool: &DbPool) -> Result<DbConn> {
    pool.get().map_err(|e| Error::Connection(e.to_string()))
}

/// Run all pending database migrations. Returns how many were applied.
///
/// # Errors
/// Returns an error if migrations fail.
pub fn run_migrations(pool: &DbPool) -> Result<usize> {
    let mut conn = checkout(pool)?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::Database(e.to_string()))?;
    Ok(applied.len())
}

/// Configure SQLite connection pragmas: wait on locks instead of failing,
/// and enforce foreign keys.
///
/// # Errors
/// Returns an error if a pragma fails to apply.
pub fn configure_sqlite_connection(conn: &mut SqliteConnection) -> Result<()> {
    apply_pragmas(conn).map_err(|e| Error::Database(e.to_string()))
}

fn apply_pragmas(conn: &mut SqliteConnection) -> QueryResult<()> {
    for pragma in ["PRAGMA busy_timeout = 5000", "PRAGMA foreign_keys = ON"] {
        diesel::sql_query(pragma).execute(conn)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[derive(diesel::QueryableByName)]
    struct TableName {
        #[diesel(sql_type = diesel::sql_types::Text)]
        name: String,
    }

    #[derive(diesel::QueryableByName)]
    struct ForeignKeys {
        #[diesel(sql_type = diesel::sql_types::Integer)]
        foreign_keys: i32,
    }

    fn file_pool(dir: &TempDir) -> DbPool {
        let path = dir.path().join("area51.db");
        create_pool(path.to_str().unwrap(), 2).unwrap()
    }

    #[test]
    fn run_migrations_creates_tables() {
        let dir = TempDir::new().unwrap();
        let pool = file_pool(&dir);
        run_migrations(&pool).unwrap();

        let mut conn = pool.get().unwrap();
        let tables: Vec<String> = diesel::sql_query(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' AND name != '__diesel_schema_migrations' ORDER BY name",
        )
        .load::<TableName>(&mut conn)
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();

        for table in [
            "admin_users",
            "banners",
            "categories",
            "customers",
            "menu_items",
            "order_items",
            "orders",
            "promotion_items",
            "promotions",
            "restaurant_settings",
            "roles",
        ] {
            assert!(tables.contains(&table.to_string()), "missing {table}");
        }
    }

    #[test]
    fn run_migrations_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let pool = file_pool(&dir);
        assert_eq!(run_migrations(&pool).unwrap(), 1);
        assert_eq!(run_migrations(&pool).unwrap(), 0);
    }

    #[test]
    fn pooled_connections_enforce_foreign_keys() {
        let dir = TempDir::new().unwrap();
        let pool = file_pool(&dir);
        for _ in 0..2 {
            let mut conn = pool.get().unwrap();
            let rows: Vec<ForeignKeys> = diesel::sql_query("PRAGMA foreign_keys")
                .load(&mut conn)
                .unwrap();
            assert_eq!(rows[0].foreign_keys, 1);
        }
    }
}
