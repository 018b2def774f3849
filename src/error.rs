use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlamapackError {
    /// The external compressor executable could not be located on PATH.
    #[error(
        "could not find `{0}` on PATH; install llama-zip and ensure the CLI \
         is available, e.g. `pip3 install .` in the llama-zip repo"
    )]
    ToolNotFound(String),

    /// No model path supplied explicitly or via LLAMAPACK_MODEL_PATH.
    #[error("missing model path; pass one explicitly or set LLAMAPACK_MODEL_PATH")]
    MissingModel,

    /// The child process exited with a nonzero status.
    #[error(
        "llama-zip compression failed\ncommand: {command}\nexit code: {status}\nstderr:\n{stderr}"
    )]
    CompressFailed {
        command: String,
        status: i32,
        stderr: String,
    },

    /// Captured output was not valid base64, or framed input failed to decode.
    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Framing input exceeds the one-byte length capacity.
    #[error("compressed payload too large for 8-bit length header: {0} bytes")]
    Oversized(usize),

    /// Framed input shorter than its declared payload length.
    #[error("framed input truncated: header declares {declared} bytes, {available} available")]
    Truncated { declared: usize, available: usize },

    /// Propagated I/O error from spawning or feeding the child process.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
