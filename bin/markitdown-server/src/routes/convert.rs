//! File conversion endpoint.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::post;
use axum::{Json, Router};

use crate::error::ServerError;
use crate::handlers::convert::{check_readable, convert_file, file_name};
use crate::schemas::convert::{ConvertRequest, ConvertResponse};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/convert", post(convert))
}

/// `POST /convert` with `{"file_path": "..."}`.
pub async fn convert(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ConvertResponse>, ServerError> {
    let ConvertRequest { file_path } = ConvertRequest::from_parts(&headers, &body)?;

    check_readable(&file_path).await?;

    let markdown = convert_file(Arc::clone(&state.converter), &file_path).await?;

    Ok(Json(ConvertResponse {
        success: true,
        markdown,
        file_name: file_name(&file_path),
        file_path,
    }))
}
