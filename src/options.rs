use crate::LlamapackError;

/// Environment variable consulted when no model path is passed explicitly.
pub const MODEL_PATH_ENV: &str = "LLAMAPACK_MODEL_PATH";

/// Options forwarded to the llama-zip CLI.
///
/// Every field is passed through as a command-line flag; none of the values
/// are interpreted here. `window_overlap` accepts either a percentage string
/// like `"25%"` or an absolute token count, exactly as llama-zip does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Context window size in tokens.
    pub n_ctx: u32,
    /// Overlap between consecutive context windows.
    pub window_overlap: String,
    /// Layers to offload to the GPU. Negative means all available.
    pub n_gpu_layers: i32,
    /// Output encoding requested from the tool.
    pub format: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            n_ctx: 8192,
            window_overlap: "25%".into(),
            n_gpu_layers: -1,
            format: "base64".into(),
        }
    }
}

/// Resolve the model path from an explicit argument and an environment
/// snapshot. The explicit value wins; the environment value is the fallback.
///
/// Callers snapshot the variable themselves (see [`model_path_from_env`]) so
/// this stays a pure function of its inputs.
pub fn resolve_model_path(
    explicit: Option<String>,
    env_value: Option<String>,
) -> Result<String, LlamapackError> {
    explicit
        .or(env_value)
        .filter(|p| !p.is_empty())
        .ok_or(LlamapackError::MissingModel)
}

/// Snapshot the model path environment variable.
pub fn model_path_from_env() -> Option<String> {
    std::env::var(MODEL_PATH_ENV).ok()
}
