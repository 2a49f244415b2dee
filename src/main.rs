mod app_system;
mod clients;
mod config;
mod domain;
mod ledger;
mod ledger_actor;
mod messages;
mod session;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;

use clap::Parser;
use tokio::io::BufReader;
use tracing::{error, info, Instrument};

use crate::app_system::{setup_tracing, LedgerSystem, SystemError};
use crate::config::Config;
use crate::session::Console;

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    let config = Config::parse();

    // Setup tracing once for the entire application
    setup_tracing(&config.log_level);

    info!(?config, "Starting order ledger session");

    // The ledger lives exactly as long as this system
    let system = LedgerSystem::new(config.channel_capacity as usize);

    let mut console = Console::new(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        system.ledger_client.clone(),
        config.chart_width as usize,
    );

    let span = tracing::info_span!("console");
    let session_result = console.run().instrument(span).await;
    if let Err(e) = &session_result {
        error!(error = %e, "Console session failed");
    }

    // Shutdown system gracefully
    system.shutdown().await?;
    session_result?;

    info!("Session ended");
    Ok(())
}
