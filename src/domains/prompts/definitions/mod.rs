//! Prompt definitions module.
//!
//! Each prompt lives in its own file and implements [`PromptDefinition`].
//! Register new prompts in `registry.rs`.

use std::collections::HashMap;

use rmcp::model::PromptArgument;

mod analyze_traffic;
mod compare_reports;
mod monthly_report;
mod realtime_insights;

pub use analyze_traffic::AnalyzeTrafficPrompt;
pub use compare_reports::CompareReportsPrompt;
pub use monthly_report::MonthlyReportPrompt;
pub use realtime_insights::RealtimeInsightsPrompt;

/// Trait for prompt definitions.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// The template string with {{variable}} placeholders.
    fn template() -> &'static str;

    /// The arguments this prompt accepts.
    fn arguments() -> Vec<PromptArgument> {
        Vec::new()
    }

    /// Fill in values for arguments the caller left empty or omitted.
    fn apply_defaults(_arguments: &mut HashMap<String, String>) {}
}

/// Build an optional prompt argument.
pub(crate) fn optional_arg(name: &str, description: &str) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        required: Some(false),
    }
}

/// Set `key` to `value` unless it already holds a non-empty string.
pub(crate) fn default_arg(arguments: &mut HashMap<String, String>, key: &str, value: &str) {
    let entry = arguments.entry(key.to_string()).or_default();
    if entry.is_empty() {
        *entry = value.to_string();
    }
}
