//! Traffic analysis prompt.

use std::collections::HashMap;

use rmcp::model::PromptArgument;

use super::{PromptDefinition, default_arg, optional_arg};

/// Walks the assistant through the traffic, device, browser and top-page
/// reports for a period.
pub struct AnalyzeTrafficPrompt;

impl PromptDefinition for AnalyzeTrafficPrompt {
    const NAME: &'static str = "analyze-traffic";
    const DESCRIPTION: &'static str =
        "Analyze website traffic patterns and trends with guided data exploration";

    fn template() -> &'static str {
        r#"Analyze the website traffic data for {{date_range}}. Please:

1. Use get_report("traffic") to fetch overall traffic metrics
2. Use get_report("devices") to understand device usage patterns
3. Use get_report("browsers") to see browser preferences
4. Use get_report("top-pages") to identify most popular content

Provide insights on:
- Traffic trends and patterns
- User behavior and preferences
- Device and browser usage
- Content performance
- Recommendations for improvement"#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![optional_arg(
            "date_range",
            "Period to analyze, e.g. \"January 2024\" (default: last 30 days)",
        )]
    }

    fn apply_defaults(arguments: &mut HashMap<String, String>) {
        default_arg(arguments, "date_range", "last 30 days");
    }
}
