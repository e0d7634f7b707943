//! Address Book Bot - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout. Logs go to stderr so they
//! never mix with replies.

use address_book_bot::{repl, Assistant, Config};
use anyhow::{Context, Result};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Configuration is loaded first so LOG_LEVEL can seed the log filter.
    let config = Config::from_env();

    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting assistant (birthday window: {} days)",
        config.birthday_window_days
    );

    let mut assistant = Assistant::from_config(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    repl::run(&mut assistant, &config.prompt, stdin.lock(), &mut stdout)
        .context("I/O error while running the assistant")?;

    info!("Assistant shutdown complete");
    Ok(())
}
