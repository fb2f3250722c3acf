//! Version information endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::warn;

use crate::schemas::meta::VersionResponse;
use crate::state::AppState;

const UNKNOWN: &str = "unknown";

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/version", get(get_version))
}

/// Server version, engine version (or `"unknown"`), and the compiler the
/// server was built with.
pub async fn get_version(State(state): State<Arc<AppState>>) -> Json<VersionResponse> {
    let converter = Arc::clone(&state.converter);
    let engine_version = match tokio::task::spawn_blocking(move || converter.version()).await {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "engine version probe task failed");
            None
        }
    };

    Json(VersionResponse {
        server_version: env!("CARGO_PKG_VERSION"),
        markitdown_version: engine_version.unwrap_or_else(|| UNKNOWN.to_owned()),
        rust_version: env!("MARKITDOWN_RUSTC_VERSION"),
    })
}
