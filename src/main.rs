//! MCP Server Entry Point
//!
//! Loads configuration, initializes logging and starts the server with the
//! configured transport.

use anyhow::Result;
use tracing::info;

use analytics_mcp_server::core::{Config, Error, McpServer, TransportService, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(Error::Cli(e)) => e.exit(),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    logging::init(&config.logging);

    info!(
        name = %config.server.name,
        version = %config.server.version,
        log_level = %config.logging.level,
        log_format = %config.logging.format,
        "Starting MCP server"
    );

    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config)?;

    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}
