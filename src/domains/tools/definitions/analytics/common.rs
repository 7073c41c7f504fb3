//! Constants and result helpers shared by the analytics tools.

use rmcp::model::{CallToolResult, Content};
use tracing::warn;

/// Default upstream API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.gsa.gov/analytics/dap/v2";

/// Records requested when the caller leaves `limit` unset.
pub const DEFAULT_LIMIT: i64 = 1000;

/// Page requested when the caller leaves `page` unset.
pub const DEFAULT_PAGE: i64 = 1;

/// Upper bound the API accepts for `limit`.
pub const MAX_LIMIT: i64 = 10_000;

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}
