//! jsonvet CLI.
//!
//! Reads one file, validates it as a JSON object document, prints a fixed
//! verdict, and sets the exit status: 0 for valid, 1 for invalid, 2 when the
//! file cannot be read at all.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use jsonvet::{check_with_limits, Limits};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jsonvet")]
#[command(about = "Check whether a file is a well-formed JSON object document", long_about = None)]
#[command(version)]
struct Cli {
    /// Path of the document to check
    file: PathBuf,

    /// Maximum input size in bytes
    #[arg(long)]
    max_size: Option<u64>,

    /// Maximum object/array nesting depth
    #[arg(long)]
    max_depth: Option<u64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let content = match fs::read_to_string(&cli.file) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::InvalidData => {
            // Not UTF-8 text: a verdict about the content, not an I/O failure
            debug!(file = %cli.file.display(), "file is not valid UTF-8");
            println!("Invalid JSON");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("jsonvet: {}: {}", cli.file.display(), err);
            return ExitCode::from(2);
        }
    };

    let mut limits = Limits::default();
    if let Some(max_size) = cli.max_size {
        limits.max_input_size = max_size;
    }
    if let Some(max_depth) = cli.max_depth {
        limits.max_nesting_depth = max_depth;
    }

    match check_with_limits(content.trim(), limits) {
        Ok(()) => {
            println!("Valid JSON");
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!(%err, file = %cli.file.display(), "document rejected");
            println!("Invalid JSON");
            ExitCode::FAILURE
        }
    }
}
