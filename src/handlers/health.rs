//! Health and readiness endpoints for liveness probes.

use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe. The service holds no connections of its own, so this only
/// reports that the process is serving.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "legalbot-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Readiness probe: checks that the upstream provider is usable.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.provider.health_check().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
