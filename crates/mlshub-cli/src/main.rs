//! MLSHub - follow your MLS club from the terminal.
//!
//! Pick a favorite team once, then see its last result, upcoming fixtures
//! and conference standing.

mod commands;

use std::io;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mlshub_core::{AppContainer, Config, DataError};

use commands::Command;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}\n", e);
            eprintln!("{}", commands::USAGE);
            std::process::exit(2);
        }
    };

    if let Command::Help = command {
        println!("{}", commands::USAGE);
        return Ok(());
    }

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            warn!(error = %e, "Failed to load config, using defaults");
            Config::default()
        }
    }
    .with_env_overrides();

    let container = AppContainer::from_config(&config)?;
    container.initialize().await;
    info!("MLSHub initialized");

    if let Err(e) = commands::run(command, &container).await {
        let error = DataError::from_any(e);
        eprintln!("Error: {}", commands::describe_error(&error));
        std::process::exit(1);
    }
    Ok(())
}
