//! Tool Registry - central registration and dispatch for all tools.
//!
//! Provides tool metadata for listing and, with the `http` feature, dispatch
//! of HTTP tool calls.

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use super::definitions::{ApiClient, GetReportTool};
#[cfg(feature = "http")]
use super::error::ToolError;

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    client: Arc<ApiClient>,
}

impl ToolRegistry {
    /// Create a new tool registry sharing `client` with every tool.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// The API client shared by every tool.
    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![GetReportTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![GetReportTool::to_tool()]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            GetReportTool::NAME => GetReportTool::http_handler(arguments, self.client.clone()).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::analytics::mock::MockHttp;

    fn registry(body: &str) -> ToolRegistry {
        let client =
            ApiClient::with_http_client("https://api.example.com", "", MockHttp::respond(200, body))
                .unwrap();
        ToolRegistry::new(Arc::new(client))
    }

    #[test]
    fn test_registry_tool_names() {
        assert_eq!(registry("[]").tool_names(), vec!["get_report"]);
        assert_eq!(ToolRegistry::get_all_tools().len(), 1);
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_get_report() {
        let result = registry(r#"[{"id":1,"os":"Linux"}]"#)
            .call_tool("get_report", serde_json::json!({ "report_name": "operating-systems" }))
            .await
            .unwrap();
        assert!(result["content"][0]["text"]
            .as_str()
            .unwrap()
            .contains("Analytics Report: operating-systems"));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown() {
        let result = registry("[]")
            .call_tool("unknown", serde_json::json!({}))
            .await;
        assert!(matches!(result, Err(ToolError::NotFound(name)) if name == "unknown"));
    }
}
