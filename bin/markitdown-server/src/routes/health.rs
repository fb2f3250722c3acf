//! Health / heartbeat endpoint.

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};

use crate::schemas::meta::{HealthResponse, SERVICE_NAME};
use crate::state::AppState;

/// Register health-check routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(get_health))
}

/// Heartbeat endpoint.
///
/// Always `200 {"status": "healthy", "service": "markitdown-server"}`; the
/// desktop app polls it to know the server is up.
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    })
}
