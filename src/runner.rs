//! Invocation of the external llama-zip compressor.
//!
//! The tool is treated as an opaque service: text goes in on stdin, base64
//! encoded compressed bytes come back on stdout, and a nonzero exit status
//! means failure. The [`Backend`] trait is the seam that lets tests swap in
//! a stub without spawning anything.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::options::Options;
use crate::LlamapackError;

/// A synchronous compression service: text and flags in, base64 bytes out.
pub trait Backend {
    /// Compress `text` with the given model and options, returning base64
    /// ASCII bytes of the compressed output.
    fn compress_base64(
        &self,
        text: &str,
        model_path: &str,
        options: &Options,
    ) -> Result<Vec<u8>, LlamapackError>;
}

/// Backend that spawns the real llama-zip CLI.
#[derive(Debug, Clone)]
pub struct LlamaZip {
    program: String,
}

impl Default for LlamaZip {
    fn default() -> Self {
        Self::new("llama-zip")
    }
}

impl LlamaZip {
    /// Create a backend invoking `program`. Either a bare name resolved via
    /// PATH or an explicit path to the executable.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn locate(&self) -> Result<PathBuf, LlamapackError> {
        find_on_path(&self.program).ok_or_else(|| LlamapackError::ToolNotFound(self.program.clone()))
    }
}

impl Backend for LlamaZip {
    fn compress_base64(
        &self,
        text: &str,
        model_path: &str,
        options: &Options,
    ) -> Result<Vec<u8>, LlamapackError> {
        let exe = self.locate()?;
        if model_path.is_empty() {
            return Err(LlamapackError::MissingModel);
        }

        // llama-zip <llm_path> [options] <mode>; input on stdin to avoid
        // argument length and quoting hazards.
        let args: Vec<OsString> = vec![
            model_path.into(),
            "-f".into(),
            options.format.as_str().into(),
            "--n-ctx".into(),
            options.n_ctx.to_string().into(),
            "-w".into(),
            options.window_overlap.as_str().into(),
            "--n-gpu-layers".into(),
            options.n_gpu_layers.to_string().into(),
            "-c".into(),
        ];

        let mut child = Command::new(&exe)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // Feed stdin from a separate thread so a child that exits without
        // draining its input (or floods stderr while we are still writing)
        // cannot fail the write or deadlock against us. A broken pipe here
        // is classified below from the exit status.
        let mut stdin = child.stdin.take().expect("stdin was piped");
        let input = text.as_bytes().to_vec();
        let writer = std::thread::spawn(move || {
            let _ = stdin.write_all(&input);
        });

        let output = child.wait_with_output()?;
        let _ = writer.join();
        if !output.status.success() {
            return Err(LlamapackError::CompressFailed {
                command: render_command(&exe, &args),
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let trimmed = output.stdout.trim_ascii();
        // Validate before returning so malformed tool output is caught here.
        BASE64.decode(trimmed)?;
        Ok(trimmed.to_vec())
    }
}

/// Locate `program` on the search path. A name containing a path separator
/// is checked as given instead of being resolved against PATH. Candidates
/// must be executable regular files, not merely present.
pub fn find_on_path(program: &str) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }
    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path)
        .map(|dir| dir.join(program))
        .find(|p| is_executable(p))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

fn render_command(exe: &Path, args: &[OsString]) -> String {
    let mut parts = vec![exe.display().to_string()];
    parts.extend(args.iter().map(|a| a.to_string_lossy().into_owned()));
    parts.join(" ")
}
