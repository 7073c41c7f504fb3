//! Tools domain module.
//!
//! Tools are executable functions that MCP clients call to perform actions.
//! This server exposes a single tool, `get_report`, which fetches analytics
//! reports from the DAP API.
//!
//! ## Architecture
//!
//! - `definitions/` - Tool implementations and their supporting code
//! - `router.rs` - ToolRouter builder for the STDIO transport
//! - `registry.rs` - Tool listing and HTTP dispatch
//! - `error.rs` - Tool-specific error types

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
