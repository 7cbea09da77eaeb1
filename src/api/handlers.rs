use axum::{extract::State, Json};
use sqlx::SqlitePool;
use tracing::info;
use utoipa::OpenApi;

use super::{
    dto::{ErrorResponse, MessageResponse, ReadingDto, ReadingsResponse, SimulateResponse},
    errors::AppError,
};
use crate::{db::readings, sensors::SimulationService};

/// Number of readings returned by `GET /data`.
pub const RECENT_READINGS_LIMIT: u32 = 10;

pub const SIMULATE_MESSAGE: &str = "Data simulated successfully";
pub const CLEAR_MESSAGE: &str = "All data cleared successfully";

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Fetch the most recent readings, ordered oldest first for charting.
#[utoipa::path(
    get,
    path = "/data",
    responses(
        (status = 200, description = "Up to 10 latest readings, ascending by timestamp", body = ReadingsResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
    tag = "readings"
)]
pub async fn get_data(State(pool): State<SqlitePool>) -> Result<Json<ReadingsResponse>, AppError> {
    let rows = readings::list_recent(&pool, RECENT_READINGS_LIMIT).await?;

    // Stored newest first; charts want chronological order.
    let data: Vec<ReadingDto> = rows.into_iter().rev().map(Into::into).collect();

    Ok(Json(ReadingsResponse::new(data)))
}

/// Generate one random reading and store it.
#[utoipa::path(
    method(get, post),
    path = "/simulate",
    responses(
        (status = 200, description = "The stored reading", body = SimulateResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
    tag = "readings"
)]
pub async fn simulate_data(
    State(pool): State<SqlitePool>,
) -> Result<Json<SimulateResponse>, AppError> {
    let reading = SimulationService::new(pool).simulate_once().await?;

    Ok(Json(SimulateResponse {
        success: true,
        message: SIMULATE_MESSAGE.to_owned(),
        data: reading.into(),
    }))
}

/// Delete every stored reading.
#[utoipa::path(
    get,
    path = "/clear",
    responses(
        (status = 200, description = "All readings deleted", body = MessageResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
    tag = "readings"
)]
pub async fn clear_data(State(pool): State<SqlitePool>) -> Result<Json<MessageResponse>, AppError> {
    let deleted = readings::clear_all(&pool).await?;
    info!(deleted, "Cleared all sensor readings");

    Ok(Json(MessageResponse {
        success: true,
        message: CLEAR_MESSAGE.to_owned(),
    }))
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Returns `200 OK` with `{"status":"ok"}` when the server is running.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy"),
    ),
    tag = "system"
)]
pub async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}

// ---------------------------------------------------------------------------
// OpenAPI spec
// ---------------------------------------------------------------------------

#[derive(OpenApi)]
#[openapi(
    paths(get_data, simulate_data, clear_data, health),
    components(schemas(ReadingDto, ReadingsResponse, SimulateResponse, MessageResponse, ErrorResponse)),
    tags(
        (name = "readings", description = "Sensor reading endpoints"),
        (name = "system",   description = "System endpoints"),
    ),
    info(
        title = "Sensor Dashboard API",
        version = "0.1.0",
        description = "JSON API behind the sensor dashboard chart"
    )
)]
pub struct ApiDoc;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
