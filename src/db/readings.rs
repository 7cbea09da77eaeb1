//! Data access for the `sensor_data` table.
//!
//! Every function takes the pool explicitly; nothing here holds state.

use sqlx::SqlitePool;
use tracing::debug;

use super::models::{NewReading, Reading, TIMESTAMP_FORMAT};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Any failure reported by the storage engine. The message is passed
    /// through untouched so callers can surface it as-is.
    #[error(transparent)]
    StorageFailure(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persist `reading` and return it with the `id` the database assigned.
pub async fn insert(pool: &SqlitePool, reading: &NewReading) -> StoreResult<Reading> {
    let timestamp = reading
        .timestamp
        .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string());

    let row = sqlx::query_as::<_, Reading>(
        r#"
        INSERT INTO sensor_data (timestamp, temperature, humidity)
        VALUES (COALESCE(?1, CURRENT_TIMESTAMP), ?2, ?3)
        RETURNING id, timestamp, temperature, humidity
        "#,
    )
    .bind(timestamp)
    .bind(reading.temperature)
    .bind(reading.humidity)
    .fetch_one(pool)
    .await?;

    debug!(id = row.id, "Inserted sensor reading");
    Ok(row)
}

/// Up to `limit` readings, newest first. Equal timestamps fall back to `id`.
pub async fn list_recent(pool: &SqlitePool, limit: u32) -> StoreResult<Vec<Reading>> {
    let rows = sqlx::query_as::<_, Reading>(
        r#"
        SELECT id, timestamp, temperature, humidity
        FROM sensor_data
        ORDER BY timestamp DESC, id DESC
        LIMIT ?1
        "#,
    )
    .bind(i64::from(limit))
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Delete every reading and return how many rows went away.
///
/// The `AUTOINCREMENT` sequence is left alone, so ids are never handed out
/// twice.
pub async fn clear_all(pool: &SqlitePool) -> StoreResult<u64> {
    let result = sqlx::query("DELETE FROM sensor_data").execute(pool).await?;
    Ok(result.rows_affected())
}
