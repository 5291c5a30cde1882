use serde::{Deserialize, Serialize};
use crate::models::domain::Restaurant;

/// Response for the restaurant search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<Restaurant>,
    pub total_results: usize,
}

impl From<Vec<Restaurant>> for SearchResponse {
    fn from(results: Vec<Restaurant>) -> Self {
        Self {
            total_results: results.len(),
            results,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub restaurants: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn bad_request(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code: 400,
        }
    }
}
