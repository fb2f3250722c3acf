//! Axum router construction.
//!
//! [`build`] assembles the complete application router:
//! - Middleware layers (CORS, per-request trace-ID span, panic recovery)
//! - `/health`, `/convert`, `/supported_formats`, `/version`
//! - JSON fallbacks for unknown paths and unsupported methods

mod convert;
mod formats;
mod health;
mod version;

use std::sync::Arc;

use axum::{Router, middleware};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::ServerError;
use crate::middleware::{cors, panic, trace};
use crate::state::AppState;

/// Build the complete Axum [`Router`] for the application.
pub fn build(state: Arc<AppState>) -> Router {
    let routes = Router::new()
        .merge(health::router())
        .merge(convert::router())
        .merge(formats::router())
        .merge(version::router());
    with_middleware(routes, state)
}

/// JSON fallbacks plus the panic, trace and CORS layers around `routes`.
fn with_middleware(routes: Router<Arc<AppState>>, state: Arc<AppState>) -> Router {
    routes
        .fallback(endpoint_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CatchPanicLayer::custom(panic::handle_panic))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            trace::trace_middleware,
        ))
        .layer(ServiceBuilder::new().layer(cors::cors_layer()))
        .with_state(state)
}

async fn endpoint_not_found() -> ServerError {
    ServerError::NotFound("Endpoint not found".into())
}

async fn method_not_allowed() -> ServerError {
    ServerError::MethodNotAllowed
}
