//! Liveness and health handlers.

use crate::api::rest::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

/// Service banner response.
#[derive(Debug, Serialize)]
pub struct ServiceInfoResponse {
    pub service: String,
    pub status: String,
}

/// Root liveness/info endpoint.
pub async fn service_info() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        service: "SIFT - signal fusion for threat intelligence".to_string(),
        status: "operational".to_string(),
    })
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub version: String,
    pub uptime: String,
}

/// Health check endpoint.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime: state.uptime(),
    })
}
