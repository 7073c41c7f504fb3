//! The `get_report` tool.
//!
//! Validates the report name and parameters, applies defaults, builds the
//! request URL and fetches the data. Validation failures are returned as
//! protocol errors; anything that goes wrong from the network call onward is
//! reported as an error result so the assistant always receives a
//! well-formed tool response.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

use super::client::ApiClient;
use super::common::{error_result, success_result};
use super::fetch::fetch_reports;
use super::models::{ReportArgs, ReportParams, ReportRequest, ReportResponse, ReportType};
use super::request::build_report_url;
use crate::domains::tools::ToolError;

/// Report fetching tool backed by the DAP API.
pub struct GetReportTool;

impl GetReportTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_report";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = r#"Fetch analytics reports from the Digital Analytics Program (DAP) API with optional filtering and pagination.

The DAP provides analytics data for U.S. federal government websites. This tool allows you to retrieve various analytics reports with flexible filtering options.

PARAMETERS:
- report_name (required): The type of report to fetch
- limit (optional): Maximum number of records to return (1-10000, default 1000)
- page (optional): Page number for pagination (default 1, 1-based indexing)
- after (optional): Start date filter in YYYY-MM-DD format
- before (optional): End date filter in YYYY-MM-DD format

AVAILABLE REPORT TYPES:
- "devices": Device types used by visitors (desktop, mobile, tablet)
- "browsers": Browser usage statistics (Chrome, Safari, Firefox, etc.)
- "operating-systems": Operating system statistics (Windows, macOS, iOS, etc.)
- "languages": Language preferences of visitors
- "countries": Geographic breakdown by country
- "cities": Geographic breakdown by city
- "traffic": Traffic volume and trends over time
- "top-pages": Most visited pages and their metrics
- "downloads": File download statistics and popular downloads
- "realtime": Real-time active user statistics
- "traffic-sources": Traffic source analysis (direct, referral, search, etc.)
- "domains": Analytics by domain for multi-domain agencies
- "agencies": Analytics aggregated by government agency

EXAMPLES:
- get_report("devices") - Get device statistics with default settings
- get_report("browsers", limit=50) - Get browser stats limited to 50 results
- get_report("traffic", after="2024-01-01", before="2024-01-31") - Get traffic for January 2024
- get_report("top-pages", page=2, limit=100) - Get second page of top pages (100 per page)
- get_report("realtime") - Get current active users

RESPONSE FORMAT:
Returns JSON data containing analytics metrics. The response structure varies by report type but typically includes numerical metrics (visits, users, pageviews), categorical data (device types, browser names), time-series data, geographic information, and behavioral metrics.

NOTE: This tool requires a valid API key to be configured via the API_KEY environment variable. The API provides analytics data for U.S. federal government websites participating in the Digital Analytics Program."#;

    /// Execute the tool logic.
    ///
    /// Returns `Err` only for invalid input or an unbuildable URL; fetch
    /// failures and empty results come back as error results.
    #[instrument(skip_all, fields(report_name = %args.report_name))]
    pub async fn execute(
        args: &ReportArgs,
        client: &ApiClient,
        cancel: &CancellationToken,
    ) -> Result<CallToolResult, ToolError> {
        info!(
            report_name = %args.report_name,
            limit = args.limit,
            "Processing get_report tool call"
        );

        let report: ReportType = args
            .report_name
            .parse()
            .map_err(|_| ToolError::invalid_report_type(&args.report_name))?;

        let params = ReportParams::from(args).with_defaults();
        params.validate()?;

        let request = ReportRequest::new(report, params);
        let url = build_report_url(client.base_url(), &request)?;

        info!(url = %url, "Making API request");

        let reports = match fetch_reports(client, url, cancel).await {
            Ok(reports) => reports,
            Err(e) => return Ok(error_result(&format!("Request failed: {}", e))),
        };

        if reports.is_empty() {
            return Ok(error_result(&format!(
                "No data found for report: {}",
                report
            )));
        }

        let count = reports.len();
        let body = serde_json::to_string_pretty(&ReportResponse::new(reports))
            .map_err(|e| ToolError::internal(format!("failed to marshal response: {}", e)))?;

        Ok(success_result(format!(
            "Analytics Report: {}\n\nFound {} records:\n\n{}",
            report, count, body
        )))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        client: Arc<ApiClient>,
    ) -> Result<serde_json::Value, ToolError> {
        let args: ReportArgs = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        let result = Self::execute(&args, &client, &CancellationToken::new()).await?;

        serde_json::to_value(&result).map_err(|e| ToolError::internal(e.to_string()))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ReportArgs>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let cancel = ctx.request_context.ct.clone();
            let client = client.clone();
            async move {
                let args: ReportArgs = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::from(ToolError::invalid_arguments(e.to_string())))?;
                Self::execute(&args, &client, &cancel)
                    .await
                    .map_err(McpError::from)
            }
            .boxed()
        })
    }
}
