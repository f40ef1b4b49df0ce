use clap::Parser;
use seiri::prelude::*;
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Normalize a generation service response into a form structure
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the raw response JSON file, or '-' to read from stdin
    response_path: String,

    /// Optional path to a normalizer configuration JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// Override the maximum number of unwrap attempts
    #[arg(long)]
    max_attempts: Option<usize>,

    /// Print the unwrap state transitions on stderr
    #[arg(long)]
    trace: bool,

    /// Emit compact instead of pretty-printed JSON
    #[arg(long)]
    compact: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let start = Instant::now();

    let mut config = match &cli.config {
        Some(path) => NormalizerConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&e.to_string())),
        None => NormalizerConfig::default(),
    };
    if let Some(attempts) = cli.max_attempts {
        config.max_unwrap_attempts = attempts;
        if let Err(e) = config.validate() {
            exit_with_error(&e.to_string());
        }
    }

    let raw_text = read_input(&cli.response_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read response '{}': {}",
            cli.response_path, e
        ))
    });
    let raw: Value = serde_json::from_str(&raw_text)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse response JSON: {}", e)));

    let pipeline = Pipeline::builder().config(config).build();
    let normalized = pipeline
        .normalize_traced(&raw)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    if cli.trace {
        eprintln!("Unwrap trace: {}", normalized.unwrapped.trace);
        if normalized.unwrapped.degraded() {
            eprintln!("Payload could not be decoded; the form is empty.");
        }
    }

    let output = if cli.compact {
        serde_json::to_string(&normalized.result)
    } else {
        serde_json::to_string_pretty(&normalized.result)
    }
    .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize result: {}", e)));
    println!("{}", output);

    eprintln!(
        "{} operation(s), {} field(s) in {:?}",
        normalized.result.operations.len(),
        normalized.result.field_count(),
        start.elapsed()
    );
}

fn read_input(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        fs::read_to_string(path)
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
