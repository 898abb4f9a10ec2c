//! CLI integration tests.
//!
//! Invokes the `jsonvet` binary as a subprocess and checks the verdict
//! strings and exit statuses.

use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use tempfile::NamedTempFile;

fn jsonvet_path() -> PathBuf {
    // Find the binary next to the test executable's directory
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_default();

    if path.ends_with("deps") {
        path.pop();
    }

    if cfg!(windows) {
        path.join("jsonvet.exe")
    } else {
        path.join("jsonvet")
    }
}

fn run_on_content(content: &str, extra_args: &[&str]) -> (i32, String, String) {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("failed to write temp file");

    let output = Command::new(jsonvet_path())
        .arg(file.path())
        .args(extra_args)
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {:?}: {e}", jsonvet_path()));

    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

// ============================================================================
// Verdicts and Exit Statuses
// ============================================================================

#[test]
fn cli_valid_document() {
    let (code, stdout, _stderr) = run_on_content(r#"{"a": 1, "b": [true, null]}"#, &[]);
    assert_eq!(code, 0, "Expected success exit status");
    assert_eq!(stdout.trim(), "Valid JSON");
}

#[test]
fn cli_invalid_document() {
    let (code, stdout, _stderr) = run_on_content(r#"{"a": 1,}"#, &[]);
    assert_eq!(code, 1, "Expected failure exit status");
    assert_eq!(stdout.trim(), "Invalid JSON");
}

#[test]
fn cli_bare_array_is_invalid() {
    let (code, stdout, _stderr) = run_on_content("[1, 2, 3]", &[]);
    assert_eq!(code, 1);
    assert_eq!(stdout.trim(), "Invalid JSON");
}

#[test]
fn cli_surrounding_whitespace_is_trimmed() {
    let (code, stdout, _stderr) = run_on_content("\n\n  {\"a\": 1}  \n", &[]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "Valid JSON");
}

#[test]
fn cli_missing_file_is_an_io_error() {
    let output = Command::new(jsonvet_path())
        .arg("/nonexistent/jsonvet-test-input.json")
        .output()
        .expect("failed to spawn jsonvet");

    assert_eq!(output.status.code(), Some(2), "I/O failure is exit status 2");
    assert!(
        !output.stderr.is_empty(),
        "I/O failure should be reported on stderr"
    );
    assert!(
        String::from_utf8_lossy(&output.stdout).trim().is_empty(),
        "No verdict should be printed for an unreadable file"
    );
}

#[test]
fn cli_no_arguments_is_a_usage_error() {
    let output = Command::new(jsonvet_path())
        .output()
        .expect("failed to spawn jsonvet");

    assert_ne!(output.status.code(), Some(0));
    assert!(!output.stderr.is_empty());
}

// ============================================================================
// Limit Flags
// ============================================================================

#[test]
fn cli_max_depth_flag() {
    let content = r#"{"a": [[[[1]]]]}"#;

    let (code, stdout, _stderr) = run_on_content(content, &[]);
    assert_eq!(code, 0, "Within default depth limit");
    assert_eq!(stdout.trim(), "Valid JSON");

    let (code, stdout, _stderr) = run_on_content(content, &["--max-depth", "2"]);
    assert_eq!(code, 1, "Beyond the configured depth limit");
    assert_eq!(stdout.trim(), "Invalid JSON");
}

#[test]
fn cli_max_size_flag() {
    let (code, stdout, _stderr) =
        run_on_content(r#"{"a": "a value longer than the limit"}"#, &["--max-size", "8"]);
    assert_eq!(code, 1);
    assert_eq!(stdout.trim(), "Invalid JSON");
}
