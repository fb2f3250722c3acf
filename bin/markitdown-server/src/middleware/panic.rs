use std::any::Any;

use axum::response::Response;
use tracing::error;

use crate::error::internal_fault_response;

/// Turn a handler panic into `500 {"error": "Internal server error"}`.
///
/// Used with [`tower_http::catch_panic::CatchPanicLayer::custom`].
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    error!(panic = %detail, "request handler panicked");
    internal_fault_response()
}
