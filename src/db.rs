//! SQLite connection pool.
//!
//! The pool is created once per process. Request handlers acquire a single
//! pooled connection for the lifetime of the request; dropping the
//! [`sqlx::pool::PoolConnection`] hands it back to the pool whether the
//! handler succeeded or failed.

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use crate::config::Config;

/// Create a connection pool to the configured SQLite database, creating the
/// file and its parent directories if they don't exist.
pub async fn connect(config: &Config) -> Result<SqlitePool> {
    let db_path = &config.db.path;

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path.display()))?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.server.max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}
