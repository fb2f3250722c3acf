//! File checks and the blocking engine call behind `POST /convert`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use markitdown_engine::{Converter, SupportedFormats};
use tracing::{debug, info, warn};

use crate::error::ServerError;

/// Ensure `path` exists and can be opened for reading.
///
/// Any metadata failure counts as "does not exist"; a path that exists but
/// cannot be opened (or listed, for directories) is "not readable".
pub async fn check_readable(path: &str) -> Result<(), ServerError> {
    let meta = tokio::fs::metadata(path).await.map_err(|e| {
        debug!(file_path = %path, error = %e, "stat failed");
        ServerError::NotFound(format!("File not found: {path}"))
    })?;

    let opened = if meta.is_dir() {
        tokio::fs::read_dir(path).await.map(drop)
    } else {
        open_for_read(path).await.map(drop)
    };

    opened.map_err(|e| {
        debug!(file_path = %path, error = %e, "open for reading failed");
        ServerError::Forbidden(format!("File is not readable: {path}"))
    })
}

/// Open without blocking on FIFOs and other special files that wait for a peer.
async fn open_for_read(path: &str) -> std::io::Result<tokio::fs::File> {
    let mut options = tokio::fs::OpenOptions::new();
    options.read(true);
    #[cfg(unix)]
    options.custom_flags(libc::O_NONBLOCK);
    options.open(path).await
}

/// Run the engine on the blocking pool and return the Markdown.
///
/// Engine errors and engine panics both surface as
/// [`ServerError::Conversion`].
pub async fn convert_file(converter: Arc<dyn Converter>, path: &str) -> Result<String, ServerError> {
    if let Some(ext) = Path::new(path).extension().and_then(|e| e.to_str()) {
        if SupportedFormats.category_of(ext).is_none() {
            debug!(file_path = %path, extension = ext, "extension not in catalog; trying anyway");
        }
    }

    let task_path = PathBuf::from(path);
    let outcome = tokio::task::spawn_blocking(move || converter.convert(&task_path)).await;

    match outcome {
        Ok(Ok(result)) => {
            if !result.is_exact() {
                warn!(file_path = %path, "engine output was not valid UTF-8; using lossy text");
            }
            let markdown = result.into_text();
            info!(file_path = %path, bytes = markdown.len(), "conversion succeeded");
            Ok(markdown)
        }
        Ok(Err(e)) => Err(ServerError::Conversion {
            path: path.to_owned(),
            message: e.to_string(),
        }),
        Err(join) => Err(ServerError::Conversion {
            path: path.to_owned(),
            message: format!("engine task failed for {path}: {join}"),
        }),
    }
}

/// Final segment of `path`, or an empty string if there is none.
pub fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
