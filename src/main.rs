//! Contact Book - Main entry point
//!
//! Loads the address book, runs the interactive prompt on stdin/stdout and
//! saves the book on exit or Ctrl-C.

use anyhow::{Context, Result};
use contact_book::{load_data, Config, Session};
use tokio::io::{stdin, stdout, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logging goes to stderr so the prompt transcript on stdout stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(path = %config.data_path.display(), "Starting contact book");

    println!("Loading AddressBook...");
    let book = load_data(&config.data_path);

    let mut session = Session::new(BufReader::new(stdin()), stdout(), book, &config.data_path);
    session.greet().await?;

    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    session
        .run(interrupt)
        .await
        .with_context(|| format!("Session ended with an error ({})", config.data_path.display()))?;

    info!("Contact book shutdown complete");
    Ok(())
}
