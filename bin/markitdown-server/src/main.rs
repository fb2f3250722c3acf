//! markitdown-server – entry point.
//!
//! Startup order:
//! 1. Parse configuration from environment variables.
//! 2. Initialise structured tracing (JSON or human-readable).
//! 3. Build the single shared conversion engine.
//! 4. Build the Axum router and serve on loopback with graceful shutdown.
//!
//! Any failure before or while serving prints a diagnostic to stderr and
//! exits with a non-zero status.

mod config;
mod error;
mod handlers;
mod middleware;
mod routes;
mod schemas;
mod state;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use markitdown_engine::{CliConverter, Converter};
use tracing::{info, warn};

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Failed to start server: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    // ── 1. Configuration ───────────────────────────────────────────────────────
    let cfg = Config::from_env().context("invalid configuration")?;

    // ── 2. Tracing ─────────────────────────────────────────────────────────────
    init_tracing(&cfg);
    info!(version = env!("CARGO_PKG_VERSION"), "markitdown-server starting");
    info!(port = cfg.port, debug = cfg.debug, "configuration loaded");

    // ── 3. Conversion engine ───────────────────────────────────────────────────
    let converter: Arc<dyn Converter> = Arc::new(CliConverter::new(&cfg.engine_program));
    let probe = Arc::clone(&converter);
    match tokio::task::spawn_blocking(move || probe.version()).await.ok().flatten() {
        Some(v) => info!(program = %cfg.engine_program, version = %v, "conversion engine found"),
        None => warn!(
            program = %cfg.engine_program,
            "conversion engine did not answer --version; conversions may fail"
        ),
    }

    // ── 4. HTTP server ─────────────────────────────────────────────────────────
    let addr = cfg.socket_addr();
    let state = Arc::new(AppState {
        config: Arc::new(cfg),
        converter,
    });
    let app = routes::build(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("could not bind {addr}"))?;
    info!(%addr, "Starting Markitdown server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("markitdown-server stopped");
    Ok(())
}

/// `RUST_LOG` wins; otherwise the configured level. An invalid filter warns
/// and falls back to `info`.
fn init_tracing(cfg: &Config) {
    let env_filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => match cfg.log_level.parse::<tracing_subscriber::EnvFilter>() {
            Ok(f) => f,
            Err(e) => {
                eprintln!(
                    "WARN: MARKITDOWN_LOG='{}' is not a valid tracing filter ({}); \
                     falling back to 'info'",
                    cfg.log_level, e
                );
                tracing_subscriber::EnvFilter::new("info")
            }
        },
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(cfg.debug)
        .with_thread_ids(cfg.debug);

    if cfg.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Returns a future that resolves when SIGINT (Ctrl-C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install CTRL+C signal handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutdown signal received; starting graceful shutdown");
}
