//! Database pool and schema management
//!
//! The record store is a single SQLite database accessed through a `sqlx` pool.
//! Every statement issued by the feature slices commits on its own; nothing in
//! the server opens a transaction around a mutation and its audit record.

use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
    SqlitePool,
};
use std::{str::FromStr, time::Duration};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::error::ServerResult;

pub mod seed;

/// Embedded schema migrations from the workspace `migrations/` directory
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");

/// Open a pool against the configured database, creating the file if needed
pub async fn create_pool(config: &DatabaseConfig) -> ServerResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect_with(options)
        .await?;

    info!(url = %config.url, "Database connection pool established");
    Ok(pool)
}

/// Open a private in-memory database with the schema applied
///
/// An in-memory SQLite database lives as long as its connection, so the pool
/// is pinned to a single connection that is never recycled.
pub async fn in_memory_pool() -> ServerResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Apply pending migrations
pub async fn run_migrations(pool: &SqlitePool) -> ServerResult<()> {
    MIGRATOR.run(pool).await?;
    info!("Database migrations completed");
    Ok(())
}

/// Cheap connectivity probe used by the health endpoint
pub async fn ping(pool: &SqlitePool) -> ServerResult<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
