use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use markitdown_engine::SupportedFormats;

use crate::schemas::meta::FormatsResponse;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/supported_formats", get(get_supported_formats))
}

pub async fn get_supported_formats() -> Json<FormatsResponse> {
    let formats = SupportedFormats;
    Json(FormatsResponse {
        total: formats.total(),
        formats,
    })
}
