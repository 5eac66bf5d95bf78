//! ContactApp - main entry point
//!
//! Runs the address book as an interactive terminal session on stdin/stdout.

use anyhow::{Context, Result};
use contact_app::{logging, Config, TerminalApp};
use std::io;
use tracing::{error, info};

fn main() -> Result<()> {
    // Load configuration first: it decides the default log level
    let config = Config::from_env();
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    logging::init(&level);

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
        title = %config.window_title,
        width = config.window_width,
        height = config.window_height,
        "Starting ContactApp"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = TerminalApp::new(stdin.lock(), stdout.lock(), config);
    app.run().context("Terminal session failed")?;

    info!("ContactApp shutdown complete");
    Ok(())
}
