//! Health check endpoints for Kubernetes probes

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::domain::DocumentFormat;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub supported_extensions: &'static [&'static str],
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// Simple health check - returns 200 if the service is running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        supported_extensions: DocumentFormat::supported_extensions(),
    };

    (StatusCode::OK, Json(response))
}

/// Liveness check for Kubernetes liveness probes
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}
