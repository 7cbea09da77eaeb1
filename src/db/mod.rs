pub mod models;
pub mod readings;

use std::{num::NonZeroU32, str::FromStr};

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Open (creating if missing) the SQLite database at `database_url`.
pub async fn create_pool(database_url: &str, max_connections: NonZeroU32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("invalid DATABASE_URL: {database_url:?}"))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.get())
        .connect_with(options)
        .await
        .with_context(|| format!("failed to open database at {database_url:?}"))?;
    Ok(pool)
}

/// Creates the `sensor_data` table if it is not there yet. Safe to run on
/// every start.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
