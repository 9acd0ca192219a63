//! Rolo - Main entry point
//!
//! This is the executable for the rolo contact manager: it loads the
//! configuration, wires up logging, and hands control to the interactive
//! session.

use anyhow::Result;
use rolo::repl::Session;
use rolo::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep stdout clean for the shell)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded, default book path: {}", config.book_path);

    let mut session = Session::new(config);
    session.run()?;

    info!("Session ended");
    Ok(())
}
