use axum::http::{HeaderMap, header};
use serde::Serialize;
use serde_json::Value;

use crate::error::ServerError;

const MISSING_FILE_PATH: &str = "Missing file_path in request";

/// Body of `POST /convert`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertRequest {
    /// Path as supplied by the caller; validated but never normalized.
    pub file_path: String,
}

impl ConvertRequest {
    /// Decode a request from its headers and raw body.
    ///
    /// A non-JSON content type or an undecodable body is a server error; a
    /// decodable body without a string `file_path` is a bad request.
    pub fn from_parts(headers: &HeaderMap, body: &[u8]) -> Result<Self, ServerError> {
        if !is_json(headers) {
            return Err(ServerError::Internal(
                "Unsupported Media Type: request Content-Type was not 'application/json'".into(),
            ));
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| ServerError::Internal(format!("Failed to decode JSON object: {e}")))?;

        value
            .as_object()
            .and_then(|obj| obj.get("file_path"))
            .and_then(Value::as_str)
            .map(|p| Self {
                file_path: p.to_owned(),
            })
            .ok_or_else(|| ServerError::BadRequest(MISSING_FILE_PATH.into()))
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .is_some_and(|essence| {
            essence == "application/json"
                || (essence.starts_with("application/") && essence.ends_with("+json"))
        })
}

/// Successful `POST /convert` response.
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub success: bool,
    pub markdown: String,
    pub file_path: String,
    pub file_name: String,
}
