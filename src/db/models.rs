use chrono::{NaiveDateTime, SubsecRound, Utc};
use sqlx::FromRow;

/// Storage and wire format of `sensor_data.timestamp` (UTC, second precision).
///
/// Fixed-width, so lexical order in SQLite equals chronological order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of `sensor_data`.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Reading {
    pub id: i64,
    /// UTC, whole seconds.
    pub timestamp: NaiveDateTime,
    /// Degrees Celsius
    pub temperature: f64,
    /// Relative humidity percentage
    pub humidity: f64,
}

/// A reading that has not been stored yet and so has no `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReading {
    /// `None` lets the database stamp the row with its current UTC time.
    pub timestamp: Option<NaiveDateTime>,
    pub temperature: f64,
    pub humidity: f64,
}

impl NewReading {
    /// A reading stamped with the current UTC time, truncated to whole seconds.
    pub fn now(temperature: f64, humidity: f64) -> Self {
        Self {
            timestamp: Some(utc_now_secs()),
            temperature,
            humidity,
        }
    }
}

pub fn utc_now_secs() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(0)
}
