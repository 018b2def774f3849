//! Text compression through the external llama-zip CLI with a one-byte
//! length frame around the result.
//!
//! The pipeline is a single linear pass with no retained state:
//!
//! ```text
//! text -> llama-zip -> base64 stdout -> decode -> frame -> base64 -> out
//! ```
//!
//! Compression itself is delegated entirely to llama-zip; this crate
//! contributes the invocation plumbing and the framing contract. Each call
//! spawns exactly one child process and blocks until it exits. Calls share
//! no state, so concurrent use is safe if the host tolerates concurrent
//! process spawning.

pub mod error;
pub mod frame;
pub mod io_utils;
pub mod options;
pub mod runner;

pub use error::LlamapackError;
pub use frame::{frame, unframe, MAX_PAYLOAD_LEN};
pub use options::{model_path_from_env, resolve_model_path, Options, MODEL_PATH_ENV};
pub use runner::{Backend, LlamaZip};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Compress `text` with llama-zip and return base64 ASCII bytes of the
/// length-framed compressed payload.
///
/// The model path falls back to `LLAMAPACK_MODEL_PATH` when not given;
/// options fall back to [`Options::default`]. Any failure from the tool or
/// the framing step propagates unchanged.
pub fn compress_to_base64(
    text: &str,
    model_path: Option<String>,
    options: Option<Options>,
) -> Result<Vec<u8>, LlamapackError> {
    compress_with_backend(&LlamaZip::default(), text, model_path, options)
}

/// Same pipeline as [`compress_to_base64`] over any [`Backend`].
pub fn compress_with_backend<B: Backend>(
    backend: &B,
    text: &str,
    model_path: Option<String>,
    options: Option<Options>,
) -> Result<Vec<u8>, LlamapackError> {
    let options = options.unwrap_or_default();
    let model_path = resolve_model_path(model_path, model_path_from_env())?;

    let compressed_b64 = backend.compress_base64(text, &model_path, &options)?;
    let payload = BASE64.decode(&compressed_b64)?;
    let framed = frame(&payload)?;
    Ok(BASE64.encode(&framed).into_bytes())
}
