use markitdown_engine::SupportedFormats;
use serde::Serialize;

pub const SERVICE_NAME: &str = "markitdown-server";

/// `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// `GET /supported_formats`
#[derive(Debug, Serialize)]
pub struct FormatsResponse {
    pub formats: SupportedFormats,
    pub total: usize,
}

/// `GET /version`
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub server_version: &'static str,
    pub markitdown_version: String,
    pub rust_version: &'static str,
}
