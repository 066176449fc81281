//! # Health Check Handler
//!
//! Simple health check endpoint for monitoring application availability.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Body of the health check response
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

/// Health check endpoint.
///
/// GET /api/v1/health
///
/// Touches no state, so it never seeds the todo store.
///
/// # Returns
///
/// Always returns `200 OK` with `{"status": "ok"}`.
#[instrument]
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check endpoint accessed");
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
