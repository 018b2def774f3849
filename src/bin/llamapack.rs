use clap::Parser;
use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::time::Instant;

use llamapack::{
    compress_with_backend,
    io_utils::{io_cli_error, llamapack_cli_error},
    LlamaZip, Options,
};

/// Compress text with llama-zip and emit base64 of the length-framed result.
#[derive(Parser)]
struct Args {
    /// Input text file; reads stdin when omitted
    input: Option<PathBuf>,
    /// Write output here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Path to the .gguf model (falls back to LLAMAPACK_MODEL_PATH)
    #[arg(short, long)]
    model: Option<String>,
    /// Context window size in tokens
    #[arg(long, default_value_t = 8192)]
    n_ctx: u32,
    /// Window overlap, a percentage like 25% or an absolute count
    #[arg(short = 'w', long, default_value = "25%")]
    overlap: String,
    /// GPU layers to offload; -1 means all
    #[arg(long, default_value_t = -1, allow_hyphen_values = true)]
    n_gpu_layers: i32,
    /// llama-zip executable to invoke
    #[arg(long, default_value = "llama-zip")]
    tool: String,
    /// Print a JSON stats line to stderr when done
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let text = match &args.input {
        Some(path) => {
            fs::read_to_string(path).map_err(|e| io_cli_error("reading input file", path, e))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let options = Options {
        n_ctx: args.n_ctx,
        window_overlap: args.overlap.clone(),
        n_gpu_layers: args.n_gpu_layers,
        ..Options::default()
    };

    let start = Instant::now();
    let backend = LlamaZip::new(args.tool.clone());
    let encoded = compress_with_backend(&backend, &text, args.model.clone(), Some(options))
        .map_err(|e| llamapack_cli_error("compression failed", e))?;

    match &args.output {
        Some(path) => {
            fs::write(path, &encoded).map_err(|e| io_cli_error("writing output file", path, e))?
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&encoded)?;
            stdout.write_all(b"\n")?;
        }
    }

    if args.json {
        let stats = serde_json::json!({
            "input_bytes": text.len(),
            "output_base64_bytes": encoded.len(),
            "elapsed_ms": start.elapsed().as_millis(),
        });
        eprintln!("{}", serde_json::to_string(&stats)?);
    }

    Ok(())
}
