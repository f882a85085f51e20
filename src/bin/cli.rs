//! CLI binary for lexmerge.

use clap::Parser;
use lexmerge::{AppConfig, AppError, render_text, spawn_lookup, validate_word};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Look an English word up and show its English and Bangla meanings.
#[derive(Parser)]
#[command(name = "lexmerge", version, about)]
struct Cli {
    /// Word to look up (letters A-Z only).
    word: String,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the merged entry as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Per-request timeout in seconds, overriding the config file.
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the result; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lexmerge=info,lexmerge_sources=info")),
        )
        .init();

    let cli = Cli::parse();
    let word = validate_word(&cli.word)?;

    let mut config = match cli.config {
        Some(ref path) => AppConfig::from_file(path)?,
        None => AppConfig::load_or_default(&lexmerge::config::default_config_path())?,
    };
    if let Some(timeout) = cli.timeout {
        config.lookup.timeout_seconds = timeout;
    }
    config.validate()?;

    info!(word = %word, "looking up");
    let lookup = spawn_lookup(word, config.lookup)
        .await
        .map_err(|e| AppError::Task(e.to_string()))??;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&lookup)?);
    } else {
        print!("{}", render_text(&lookup));
    }

    Ok(())
}
