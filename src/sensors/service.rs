use std::time::Duration;

use sqlx::SqlitePool;
use tokio::time;
use tracing::{error, info};

use crate::db::{
    models::Reading,
    readings::{self, StoreResult},
};

use super::generator;

/// Generates simulated readings and persists them.
///
/// Backs both `/simulate` and the optional background loop.
#[derive(Clone)]
pub struct SimulationService {
    pool: SqlitePool,
}

impl SimulationService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Generate one reading and store it.
    pub async fn simulate_once(&self) -> StoreResult<Reading> {
        let reading = readings::insert(&self.pool, &generator::generate()).await?;
        info!(
            id = reading.id,
            temperature = reading.temperature,
            humidity = reading.humidity,
            "Simulated reading stored"
        );
        Ok(reading)
    }

    /// Runs the simulation loop indefinitely.
    /// Spawn this via `tokio::spawn`.
    pub async fn run(self, interval: Duration) {
        info!(interval_secs = interval.as_secs(), "Simulation loop started");
        let mut ticker = time::interval(interval);

        loop {
            ticker.tick().await;
            if let Err(e) = self.simulate_once().await {
                error!(error = %e, "Simulation loop iteration failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use sqlx::SqlitePool;

    use super::*;
    use crate::sensors::generator::{HUMIDITY_RANGE, TEMPERATURE_RANGE};

    async fn count(pool: &SqlitePool) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM sensor_data")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn simulate_once_persists_one_row(pool: SqlitePool) {
        let service = SimulationService::new(pool.clone());
        let reading = service.simulate_once().await.unwrap();

        assert_eq!(count(&pool).await, 1);
        assert!(TEMPERATURE_RANGE.contains(&reading.temperature));
        assert!(HUMIDITY_RANGE.contains(&reading.humidity));

        let stored = readings::list_recent(&pool, 1).await.unwrap();
        assert_eq!(stored, vec![reading]);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn run_keeps_inserting_until_cancelled(pool: SqlitePool) {
        let service = SimulationService::new(pool.clone());
        // First tick fires immediately.
        let _ = time::timeout(Duration::from_millis(300), service.run(Duration::from_millis(50))).await;

        assert!(count(&pool).await >= 2);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn run_survives_storage_failures(pool: SqlitePool) {
        sqlx::query("DROP TABLE sensor_data").execute(&pool).await.unwrap();

        let service = SimulationService::new(pool);
        let res = time::timeout(Duration::from_millis(150), service.run(Duration::from_millis(20))).await;

        // Still looping when the timeout fires.
        assert!(res.is_err());
    }
}
