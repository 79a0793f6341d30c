//! Store lifecycle: open the SQLite pool with foreign keys enforced, probe it, close it.

use crate::config::DatabaseSettings;
use crate::error::AppError;
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool};
use std::str::FromStr;

/// Open a pool for `settings.url`, creating the database file if it does not exist.
/// Every connection runs with `PRAGMA foreign_keys = ON`.
pub async fn connect(settings: &DatabaseSettings) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(&settings.url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(opts)
        .await?;
    tracing::info!(url = %settings.url, max_connections = settings.max_connections, "store opened");
    Ok(pool)
}

/// Private in-memory database. A single connection that is never recycled, since each
/// SQLite memory connection is its own database.
pub async fn connect_in_memory() -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Round-trip a trivial query. Used by the readiness probe.
pub async fn ping(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query("SELECT 1").fetch_optional(pool).await?;
    Ok(())
}

/// Run a single-row INSERT in its own transaction and return the new rowid.
/// A unique or foreign-key violation rolls the transaction back and surfaces as
/// `Conflict(conflict_message)`, so no partial row is left behind.
pub async fn insert_returning_id<'q>(
    pool: &SqlitePool,
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    conflict_message: &str,
) -> Result<i64, AppError> {
    let mut tx = pool.begin().await?;
    match query.execute(&mut *tx).await {
        Ok(done) => {
            tx.commit()
                .await
                .map_err(|e| AppError::from_write(e, conflict_message))?;
            Ok(done.last_insert_rowid())
        }
        Err(e) => {
            if let Err(rb) = tx.rollback().await {
                tracing::error!(error = %rb, "rollback after failed insert");
            }
            let err = AppError::from_write(e, conflict_message);
            if let AppError::Conflict(ref msg) = err {
                tracing::warn!(conflict = %msg, "insert rolled back");
            }
            Err(err)
        }
    }
}

/// Waits for checked-out connections to be returned, then closes the pool.
pub async fn close(pool: SqlitePool) {
    pool.close().await;
    tracing::info!("store closed");
}
