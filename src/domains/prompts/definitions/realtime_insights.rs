//! Real-time insights prompt.

use super::PromptDefinition;

/// Looks at current activity. Takes no arguments.
pub struct RealtimeInsightsPrompt;

impl PromptDefinition for RealtimeInsightsPrompt {
    const NAME: &'static str = "realtime-insights";
    const DESCRIPTION: &'static str = "Get real-time website analytics and insights";

    fn template() -> &'static str {
        r#"Provide real-time analytics insights. Please:

1. Use get_report("realtime") to get current active users
2. Use get_report("traffic") to get recent traffic trends
3. Use get_report("top-pages") to see what content is currently popular

Analyze and provide:
- Current website activity levels
- Real-time user engagement
- Popular content right now
- Traffic patterns compared to historical data
- Immediate optimization opportunities
- Alert-worthy trends or anomalies"#
    }
}
