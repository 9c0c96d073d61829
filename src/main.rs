//! Contact Book MCP Server - Main entry point
//!
//! Serves an in-memory contact book over the Model Context Protocol on stdio.

use anyhow::Result;
use contact_book::services::share;
use contact_book::{Config, ContactBookServer, Session};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL from .env is honoured
    let config = Config::from_env();

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
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

    let session = Session::from_config(&config);
    info!(
        "Session ready: {} contacts, {} groups, {} theme",
        session.store().len(),
        session.store().groups().len(),
        session.theme()
    );

    let server = ContactBookServer::new(share(session));

    // Run the server (this will block until the server exits)
    info!("Starting MCP server with stdio transport");
    contact_book::server::run_server(server).await?;

    info!("Contact Book server shutdown complete");
    Ok(())
}
