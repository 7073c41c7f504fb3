//! Two-report comparison prompt.

use std::collections::HashMap;

use rmcp::model::PromptArgument;

use super::{PromptDefinition, default_arg, optional_arg};

/// Compares two report types side by side.
pub struct CompareReportsPrompt;

impl PromptDefinition for CompareReportsPrompt {
    const NAME: &'static str = "compare-reports";
    const DESCRIPTION: &'static str = "Compare and analyze two different report types for insights";

    fn template() -> &'static str {
        r#"Compare {{report1}} and {{report2}} reports. Please:

1. Use get_report("{{report1}}") to fetch the first report
2. Use get_report("{{report2}}") to fetch the second report
3. Analyze the data from both reports

Provide a comparative analysis including:
- Key metrics from each report
- Trends and patterns observed
- Correlations between the two data sets
- Actionable insights and recommendations
- Data visualization suggestions"#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            optional_arg("report1", "First report type (default: devices)"),
            optional_arg("report2", "Second report type (default: browsers)"),
        ]
    }

    fn apply_defaults(arguments: &mut HashMap<String, String>) {
        default_arg(arguments, "report1", "devices");
        default_arg(arguments, "report2", "browsers");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_independent() {
        let mut args = HashMap::from([("report2".to_string(), "countries".to_string())]);
        CompareReportsPrompt::apply_defaults(&mut args);
        assert_eq!(args["report1"], "devices");
        assert_eq!(args["report2"], "countries");

        let mut args = HashMap::from([("report1".to_string(), "cities".to_string())]);
        CompareReportsPrompt::apply_defaults(&mut args);
        assert_eq!(args["report1"], "cities");
        assert_eq!(args["report2"], "browsers");
    }
}
