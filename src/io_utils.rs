use std::fmt;
use std::io;
use std::path::Path;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        UnexpectedEof => "File appears truncated or corrupted.",
        WriteZero => "Disk may be full. Free up space and try again.",
        Other if err.raw_os_error() == Some(28) => "Disk may be full. Free up space and try again.",
        _ => "Check permissions or free up disk space.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Convert a llamapack library error into a CLI error with a hint.
pub fn llamapack_cli_error(context: &str, err: crate::LlamapackError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for a llamapack error variant.
pub fn cli_hint(err: &crate::LlamapackError) -> String {
    use crate::LlamapackError::*;
    match err {
        ToolNotFound(prog) => format!("`{prog}` not found. Install llama-zip first."),
        MissingModel => "No model path. Pass --model or set LLAMAPACK_MODEL_PATH.".into(),
        CompressFailed {
            command,
            status,
            stderr,
        } => format!("llama-zip exited with code {status}.\ncommand: {command}\n{stderr}"),
        Base64(e) => format!("{e}. Tool output was not valid base64."),
        Oversized(n) => format!("Compressed payload is {n} bytes, over the 255 byte frame limit."),
        Truncated { .. } => "Framed data is truncated. Verify the input is intact.".into(),
        Io(io) => format!("{io}"),
    }
}
