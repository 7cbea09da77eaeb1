use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db::models::{Reading, TIMESTAMP_FORMAT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReadingDto {
    pub id: i64,
    /// UTC, formatted as `YYYY-MM-DD HH:MM:SS`.
    #[schema(example = "2024-05-01 12:00:00")]
    pub timestamp: String,
    /// Degrees Celsius
    pub temperature: f64,
    /// Relative humidity percentage
    pub humidity: f64,
}

impl From<Reading> for ReadingDto {
    fn from(r: Reading) -> Self {
        Self {
            id: r.id,
            timestamp: r.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            temperature: r.temperature,
            humidity: r.humidity,
        }
    }
}

/// Response for `GET /data`. `data` is ordered oldest first.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReadingsResponse {
    pub success: bool,
    pub data: Vec<ReadingDto>,
    pub count: usize,
}

impl ReadingsResponse {
    pub fn new(data: Vec<ReadingDto>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// Response for `GET|POST /simulate`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SimulateResponse {
    pub success: bool,
    pub message: String,
    pub data: ReadingDto,
}

/// Response for `GET /clear`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Body of every `500` response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: String) -> Self {
        Self { success: false, error }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use serde_json::json;

    use super::*;

    #[test]
    fn reading_serializes_with_plain_timestamp() {
        let reading = Reading {
            id: 7,
            timestamp: NaiveDateTime::parse_from_str("2024-05-01 08:03:09", TIMESTAMP_FORMAT).unwrap(),
            temperature: 24.5,
            humidity: 55.12,
        };

        let value = serde_json::to_value(ReadingDto::from(reading)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "timestamp": "2024-05-01 08:03:09",
                "temperature": 24.5,
                "humidity": 55.12,
            })
        );
    }

    #[test]
    fn readings_response_counts_its_data() {
        let body = serde_json::to_value(ReadingsResponse::new(vec![])).unwrap();
        assert_eq!(body, json!({ "success": true, "data": [], "count": 0 }));
    }

    #[test]
    fn error_response_is_unsuccessful() {
        let body = serde_json::to_value(ErrorResponse::new("boom".into())).unwrap();
        assert_eq!(body, json!({ "success": false, "error": "boom" }));
    }
}
