//! Unified server error type.
//!
//! Every handler returns `Result<T, ServerError>`, which implements
//! [`axum::response::IntoResponse`] so errors turn into a JSON body of the
//! form `{"error": "..."}` with the matching status code.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// All errors that can occur in the markitdown-server request lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The request body is missing a required field.
    #[error("{0}")]
    BadRequest(String),

    /// The referenced file or route does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The referenced file exists but cannot be read.
    #[error("{0}")]
    Forbidden(String),

    /// The route exists but not for this HTTP method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The conversion engine failed on `path`.
    #[error("Conversion failed: {message}")]
    Conversion { path: String, message: String },

    /// Anything else. The message is the failure's string form.
    #[error("Server error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Forbidden(_) => StatusCode::FORBIDDEN,
            ServerError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ServerError::Conversion { .. } | ServerError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ServerError::Conversion { path, message } => {
                error!(file_path = %path, error = %message, "conversion error");
                json!({ "error": self.to_string(), "file_path": path })
            }
            ServerError::Internal(m) => {
                error!(message = %m, "server error");
                json!({ "error": self.to_string() })
            }
            _ => json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

/// Body used when a handler panics or the router otherwise faults.
pub fn internal_fault_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal server error" })),
    )
        .into_response()
}
