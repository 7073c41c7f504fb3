//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use super::definitions::analytics::{RequestBuildError, ReportType, models::ParamError};

/// Errors that abort a tool call before a result can be produced.
///
/// Failures from the upstream request itself are not represented here;
/// they are reported as error results instead.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// The report name is not one of the known report types.
    #[error("invalid report type '{name}'. Valid types: {valid}")]
    InvalidReportType { name: String, valid: String },

    /// A pagination parameter is out of range.
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[from] ParamError),

    /// The request URL could not be built.
    #[error("failed to build API URL: {0}")]
    RequestBuild(#[from] RequestBuildError),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create an "invalid report type" error listing every valid type.
    pub fn invalid_report_type(name: impl Into<String>) -> Self {
        Self::InvalidReportType {
            name: name.into(),
            valid: ReportType::valid_names(),
        }
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::InvalidReportType { .. }
            | ToolError::InvalidParameters(_)
            | ToolError::InvalidArguments(_)
            | ToolError::NotFound(_) => McpError::invalid_params(err.to_string(), None),
            ToolError::RequestBuild(_) | ToolError::Internal(_) => {
                McpError::internal_error(err.to_string(), None)
            }
        }
    }
}
