//! Contact Assistant - Main entry point
//!
//! Reads commands from stdin and answers on stdout. Logs go to stderr.

use anyhow::Result;
use contact_assistant::commands::Dispatcher;
use contact_assistant::repl::run_session;
use contact_assistant::Config;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Logging goes to stderr so it never mixes with the conversation on stdout
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

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
        birthday_format = %config.birthday_format,
        horizon_days = config.birthday_horizon_days,
        "Starting contact assistant"
    );

    let mut dispatcher = Dispatcher::new(&config);
    run_session(
        &mut dispatcher,
        io::stdin().lock(),
        io::stdout().lock(),
        &config.prompt,
    )?;

    info!("{}", dispatcher.metrics().summary());
    info!(
        contacts = dispatcher.book().len(),
        "Contact assistant shutdown complete"
    );
    Ok(())
}
