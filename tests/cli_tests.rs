#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

fn write_stub(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("llama-zip-stub");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[test]
fn cli_compresses_file_through_stub() {
    let exe = env!("CARGO_BIN_EXE_llamapack");
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(dir.path(), "cat >/dev/null\necho AQID/w==");
    let input = dir.path().join("input.txt");
    fs::write(&input, "the quick brown fox").unwrap();

    let output = Command::new(exe)
        .args([
            input.to_str().unwrap(),
            "--tool",
            stub.to_str().unwrap(),
            "--model",
            "model.gguf",
        ])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    assert_eq!(output.stdout, b"BAECA/8=\n");
}

#[test]
fn cli_writes_output_file_and_json_stats() {
    let exe = env!("CARGO_BIN_EXE_llamapack");
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(dir.path(), "cat >/dev/null\necho AQID/w==");
    let input = dir.path().join("input.txt");
    let out = dir.path().join("out.b64");
    fs::write(&input, "text").unwrap();

    let output = Command::new(exe)
        .args([
            input.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
            "--tool",
            stub.to_str().unwrap(),
            "--model",
            "model.gguf",
            "--json",
        ])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    assert_eq!(fs::read(&out).unwrap(), b"BAECA/8=");

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stats: serde_json::Value = serde_json::from_str(stderr.trim()).unwrap();
    assert_eq!(stats["input_bytes"], 4);
    assert_eq!(stats["output_base64_bytes"], 8);
}

#[test]
fn cli_reads_stdin_when_no_input_file() {
    let exe = env!("CARGO_BIN_EXE_llamapack");
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(dir.path(), "cat >/dev/null\necho AA==");

    let mut child = Command::new(exe)
        .args(["--tool", stub.to_str().unwrap(), "--model", "model.gguf"])
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .spawn()
        .expect("spawn failed");
    use std::io::Write;
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"from stdin")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    // Stub reports a single zero byte; framed and re-encoded that is AQA=.
    assert_eq!(output.stdout, b"AQA=\n");
}

#[test]
fn cli_surfaces_tool_failure_exit_code() {
    let exe = env!("CARGO_BIN_EXE_llamapack");
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(dir.path(), "cat >/dev/null\necho boom >&2\nexit 7");
    let input = dir.path().join("input.txt");
    fs::write(&input, "text").unwrap();

    let output = Command::new(exe)
        .args([
            input.to_str().unwrap(),
            "--tool",
            stub.to_str().unwrap(),
            "--model",
            "model.gguf",
        ])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("exited with code 7"));
    assert!(stderr.contains("boom"));
}

#[test]
fn cli_reports_missing_model() {
    let exe = env!("CARGO_BIN_EXE_llamapack");
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(dir.path(), "echo AA==");
    let input = dir.path().join("input.txt");
    fs::write(&input, "text").unwrap();

    let output = Command::new(exe)
        .args([input.to_str().unwrap(), "--tool", stub.to_str().unwrap()])
        .env_remove("LLAMAPACK_MODEL_PATH")
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("LLAMAPACK_MODEL_PATH"));
}

#[test]
fn cli_reports_missing_tool() {
    let exe = env!("CARGO_BIN_EXE_llamapack");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "text").unwrap();

    let output = Command::new(exe)
        .args([
            input.to_str().unwrap(),
            "--tool",
            "no-such-llama-zip-anywhere",
            "--model",
            "model.gguf",
        ])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"));
}

#[test]
fn cli_model_env_fallback_applies() {
    let exe = env!("CARGO_BIN_EXE_llamapack");
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(dir.path(), "cat >/dev/null\necho AQID/w==");
    let input = dir.path().join("input.txt");
    fs::write(&input, "text").unwrap();

    let output = Command::new(exe)
        .args([input.to_str().unwrap(), "--tool", stub.to_str().unwrap()])
        .env("LLAMAPACK_MODEL_PATH", "model.gguf")
        .output()
        .expect("run failed");
    assert!(output.status.success());
    assert_eq!(output.stdout, b"BAECA/8=\n");
}
