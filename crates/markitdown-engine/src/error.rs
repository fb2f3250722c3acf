use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while running the conversion engine.
///
/// Every variant carries the path being converted so that the message alone
/// is enough to tell which request failed.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine executable could not be found.
    #[error("engine `{program}` is not installed or not on PATH (converting {})", path.display())]
    Unavailable { program: String, path: PathBuf },

    /// The engine process could not be started.
    #[error("failed to start engine for {}: {source}", path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The engine ran and reported a failure.
    #[error("{}: {message} ({status})", path.display())]
    Failed {
        path: PathBuf,
        status: String,
        message: String,
    },
}
