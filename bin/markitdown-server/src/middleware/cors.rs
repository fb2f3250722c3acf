use tower_http::cors::{Any, CorsLayer};

/// Allow every origin, method and header.
///
/// The only client is the desktop frontend, which runs in its own process
/// and reaches the server over localhost from a `file://` page.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any)
}
