//! Binding to the `markitdown` command-line tool.

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tracing::{debug, warn};

use crate::{ConversionResult, Converter, EngineError};

/// Default executable name, resolved through `PATH`.
pub const DEFAULT_PROGRAM: &str = "markitdown";

/// [`Converter`] that runs an external executable once per file.
///
/// The command line is `<program> <args...> -- <path>` and the Markdown is read
/// from stdout. The struct holds no per-call state, so one instance can serve
/// concurrent conversions.
#[derive(Debug, Clone)]
pub struct CliConverter {
    program: OsString,
    args: Vec<OsString>,
}

impl CliConverter {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Arguments placed before the file path (or `--version`).
    pub fn with_args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).stdin(Stdio::null());
        command
    }

    fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

impl Converter for CliConverter {
    fn convert(&self, path: &Path) -> Result<ConversionResult, EngineError> {
        debug!(program = %self.program_name(), path = %path.display(), "running engine");

        let output = self.command().arg("--").arg(path).output().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                EngineError::Unavailable {
                    program: self.program_name(),
                    path: path.to_path_buf(),
                }
            } else {
                EngineError::Spawn {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        if !output.status.success() {
            return Err(EngineError::Failed {
                path: path.to_path_buf(),
                status: output.status.to_string(),
                message: failure_message(&output),
            });
        }

        Ok(ConversionResult::from_output(output.stdout))
    }

    fn version(&self) -> Option<String> {
        let output = match self.command().arg("--version").output() {
            Ok(output) => output,
            Err(e) => {
                warn!(program = %self.program_name(), error = %e, "engine version probe failed");
                return None;
            }
        };
        if !output.status.success() {
            return None;
        }
        parse_version(&String::from_utf8_lossy(&output.stdout))
            .or_else(|| parse_version(&String::from_utf8_lossy(&output.stderr)))
    }
}

/// Pick the most useful line from a failed run: the last non-empty stderr
/// line (Python tracebacks end with the exception), else stdout, else a
/// placeholder.
fn failure_message(output: &Output) -> String {
    last_line(&output.stderr)
        .or_else(|| last_line(&output.stdout))
        .unwrap_or_else(|| "engine produced no diagnostic output".to_owned())
}

fn last_line(bytes: &[u8]) -> Option<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::trim)
        .rfind(|l| !l.is_empty())
        .map(str::to_owned)
}

/// `"markitdown 0.1.2"` → `"0.1.2"`.
fn parse_version(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .and_then(|l| l.split_whitespace().last())
        .map(str::to_owned)
}
