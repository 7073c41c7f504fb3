//! Analytics MCP Server Library
//!
//! A Model Context Protocol server for the Digital Analytics Program (DAP)
//! reports API. It exposes one tool, `get_report`, four analysis prompts and
//! an embedded `embedded:info` resource, over STDIO or HTTP.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, logging, the MCP server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the `get_report` tool and its API client
//!   - **resources**: embedded read-only documents
//!   - **prompts**: prompt templates for guided analyses
//!
//! # Example
//!
//! ```rust,no_run
//! use analytics_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let transport = TransportService::new(config.transport.clone());
//!     transport.run(McpServer::new(config)?).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
