//! Server configuration, loaded from environment variables at startup.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

/// Port the desktop frontend expects when `MARKITDOWN_PORT` is unset.
pub const DEFAULT_PORT: u16 = 5678;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key}='{value}' is not a valid port number")]
    InvalidPort { key: &'static str, value: String },
}

/// Runtime configuration for markitdown-server.
///
/// Every field has a default so the server starts without any environment
/// variables set. The listen address is always loopback; the server only
/// talks to the desktop app on the same machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// TCP port on `127.0.0.1` (default: `5678`).
    pub port: u16,

    /// Development mode: chattier logging and per-request header dumps.
    pub debug: bool,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Engine executable, resolved through `PATH` unless absolute.
    pub engine_program: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            debug: false,
            log_level: "info".to_owned(),
            log_json: false,
            engine_program: markitdown_engine::cli::DEFAULT_PROGRAM.to_owned(),
        }
    }
}

impl Config {
    /// Build [`Config`] from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build [`Config`] from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("MARKITDOWN_PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort {
                    key: "MARKITDOWN_PORT",
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        // The desktop launcher sets FLASK_ENV; MARKITDOWN_ENV takes precedence.
        let debug = lookup("MARKITDOWN_ENV")
            .or_else(|| lookup("FLASK_ENV"))
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("development"));

        let default_level = if debug { "debug" } else { "info" };

        Ok(Self {
            port,
            debug,
            log_level: lookup("MARKITDOWN_LOG").unwrap_or_else(|| default_level.to_owned()),
            log_json: lookup("MARKITDOWN_LOG_JSON")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            engine_program: lookup("MARKITDOWN_BIN")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| markitdown_engine::cli::DEFAULT_PROGRAM.to_owned()),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), self.port)
    }
}
