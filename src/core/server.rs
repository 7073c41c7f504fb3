//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services. Tools are routed by
//! the `ToolRouter` built in `domains/tools/router.rs`; the HTTP transport
//! goes through the helper methods below instead.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

use super::config::Config;
use crate::domains::{
    prompts::PromptService,
    resources::ResourceService,
    tools::{ToolRegistry, build_tool_router, definitions::ApiClient},
};

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Instructions sent to clients on initialization.
pub const INSTRUCTIONS: &str = "This server provides analytics reports for U.S. federal government \
websites from the Digital Analytics Program (DAP). Use the get_report tool to fetch a report by type \
(devices, browsers, traffic, top-pages, realtime, ...) with optional limit, page and after/before date \
filters. The prompts walk through common analyses; the embedded:info resource describes the server.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between different domain services to handle MCP protocol messages.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool registry holding the shared analytics API client.
    tool_registry: Arc<ToolRegistry>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Service for handling prompt-related requests.
    prompt_service: Arc<PromptService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server, building the API client from `config`.
    pub fn new(config: Config) -> crate::core::Result<Self> {
        let api_key = config.api.api_key.as_deref().unwrap_or_default();
        let client = ApiClient::new(
            &config.api.base_url,
            api_key,
            Duration::from_secs(config.api.timeout_secs),
        )?;

        if !client.has_api_key() {
            warn!("API_KEY is not set; requests will be sent without credentials");
        }

        Ok(Self::with_client(config, Arc::new(client)))
    }

    /// Create a new MCP server around an existing API client.
    pub fn with_client(config: Config, api_client: Arc<ApiClient>) -> Self {
        let tool_registry = Arc::new(ToolRegistry::new(api_client));
        Self {
            tool_router: build_tool_router::<Self>(tool_registry.client().clone()),
            config: Arc::new(config),
            tool_registry,
            resource_service: Arc::new(ResourceService::new()),
            prompt_service: Arc::new(PromptService::new()),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the tool registry.
    pub fn tools(&self) -> &ToolRegistry {
        &self.tool_registry
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        self.tool_registry.call_tool(name, arguments).await
    }

    /// List all available resources (for HTTP transport).
    pub async fn list_resources(&self) -> Vec<serde_json::Value> {
        let resources = self.resource_service.list_resources().await;

        resources
            .into_iter()
            .map(|r| {
                serde_json::json!({
                    "uri": r.uri,
                    "name": r.name,
                    "description": r.description,
                    "mimeType": r.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI (for HTTP transport).
    pub async fn read_resource(&self, uri: &str) -> Result<serde_json::Value, String> {
        match self.resource_service.read_resource(uri).await {
            Ok(result) => Ok(serde_json::json!({
                "contents": result.contents
            })),
            Err(e) => Err(e.to_string()),
        }
    }

    /// List all available prompts (for HTTP transport).
    pub async fn list_prompts(&self) -> Vec<serde_json::Value> {
        let prompts = self.prompt_service.list_prompts().await;

        prompts
            .into_iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name,
                    "description": p.description,
                    "arguments": p.arguments
                })
            })
            .collect()
    }

    /// Get a prompt by name (for HTTP transport).
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, String> {
        let args = arguments.and_then(|v| {
            v.as_object().map(|obj| {
                obj.iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
        });

        match self.prompt_service.get_prompt(name, args).await {
            Ok(result) => Ok(serde_json::json!({
                "description": result.description,
                "messages": result.messages
            })),
            Err(e) => Err(e.to_string()),
        }
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        let prompts = self.prompt_service.list_prompts().await;
        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        let arguments = request.arguments.map(|map| {
            map.into_iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
                .collect()
        });
        self.prompt_service
            .get_prompt(&request.name, arguments)
            .await
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::analytics::mock::MockHttp;

    fn test_server(status: u16, body: &str) -> McpServer {
        let client =
            ApiClient::with_http_client("https://api.example.com", "", MockHttp::respond(status, body))
                .unwrap();
        McpServer::with_client(Config::default(), Arc::new(client))
    }

    #[test]
    fn test_get_info() {
        let info = test_server(200, "[]").get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.instructions.unwrap().contains("get_report"));
    }

    #[test]
    fn test_tools_share_client() {
        let client = Arc::new(
            ApiClient::with_http_client("https://api.example.com", "", MockHttp::respond(200, "[]"))
                .unwrap(),
        );
        let server = McpServer::with_client(Config::default(), client.clone());
        assert!(Arc::ptr_eq(server.tools().client(), &client));
        assert_eq!(server.tools().tool_names(), vec!["get_report"]);
    }

    #[test]
    fn test_new_with_default_config() {
        let server = McpServer::new(Config::default()).unwrap();
        assert_eq!(server.name(), "analytics-mcp-server");
        assert_eq!(server.list_tools().len(), 1);
    }

    #[test]
    fn test_new_rejects_bad_api_key() {
        let mut config = Config::default();
        config.api.api_key = Some("line\nbreak".to_string());
        assert!(McpServer::new(config).is_err());
    }

    #[tokio::test]
    async fn test_http_helpers() {
        let server = test_server(200, "[]");

        let tools = server.list_tools();
        assert_eq!(tools[0]["name"], "get_report");
        assert!(tools[0]["inputSchema"]["properties"]["report_name"].is_object());

        let resources = server.list_resources().await;
        assert_eq!(resources[0]["uri"], "embedded:info");
        assert_eq!(resources[0]["mimeType"], "text/plain");

        let contents = server.read_resource("embedded:info").await.unwrap();
        assert_eq!(
            contents["contents"][0]["text"],
            "This is the hello example server."
        );
        assert!(server.read_resource("embedded:missing").await.is_err());

        assert_eq!(server.list_prompts().await.len(), 4);
        let prompt = server
            .get_prompt(
                "compare-reports",
                Some(serde_json::json!({ "report1": "cities" })),
            )
            .await
            .unwrap();
        let text = prompt["messages"][0]["content"]["text"].as_str().unwrap();
        assert!(text.starts_with("Compare cities and browsers reports."));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_http_call_tool() {
        let server = test_server(200, "[]");
        let result = server
            .call_tool("get_report", serde_json::json!({ "report_name": "devices" }))
            .await
            .unwrap();
        assert_eq!(result["isError"], true);
        assert_eq!(
            result["content"][0]["text"],
            "No data found for report: devices"
        );

        let err = server
            .call_tool("get_report", serde_json::json!({ "report_name": "nope" }))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidReportType { .. }));
    }
}
