//! Conversion engine seam for markitdown-server.
//!
//! [`Converter`] is the interface the server talks to. The production
//! implementation is [`cli::CliConverter`], which shells out to the
//! `markitdown` executable; tests substitute their own implementations.
//!
//! The trait is synchronous on purpose: a conversion is a single blocking
//! call, and callers running on an async runtime are expected to move it
//! onto a blocking thread (e.g. `tokio::task::spawn_blocking`).

pub mod cli;
pub mod error;
pub mod formats;
pub mod result;

use std::path::Path;

pub use cli::CliConverter;
pub use error::EngineError;
pub use formats::{FormatCategory, SupportedFormats};
pub use result::ConversionResult;

/// A file-to-Markdown conversion engine.
///
/// One instance is built at startup and shared across all requests, so
/// implementations must tolerate concurrent calls through `&self`.
pub trait Converter: Send + Sync {
    /// Convert the file at `path` into Markdown.
    fn convert(&self, path: &Path) -> Result<ConversionResult, EngineError>;

    /// Version of the underlying engine, if it can be determined.
    fn version(&self) -> Option<String>;
}
