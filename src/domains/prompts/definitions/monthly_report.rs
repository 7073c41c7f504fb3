//! Monthly report prompt.

use std::collections::HashMap;

use rmcp::model::PromptArgument;

use super::{PromptDefinition, optional_arg};

const DEFAULT_MONTH: &str = "01";
const DEFAULT_YEAR: &str = "2024";

/// Builds a month-long report across traffic, devices, pages and countries.
///
/// The date filters always span day 01 to day 31 of the month.
pub struct MonthlyReportPrompt;

impl PromptDefinition for MonthlyReportPrompt {
    const NAME: &'static str = "monthly-report";
    const DESCRIPTION: &'static str = "Generate comprehensive monthly analytics report";

    fn template() -> &'static str {
        r#"Generate a comprehensive monthly analytics report for {{month}}/{{year}}. Please:

1. Use get_report("traffic", after="{{year}}-{{month}}-01", before="{{year}}-{{month}}-31") for traffic data
2. Use get_report("devices", after="{{year}}-{{month}}-01", before="{{year}}-{{month}}-31") for device breakdown
3. Use get_report("top-pages", after="{{year}}-{{month}}-01", before="{{year}}-{{month}}-31") for content performance
4. Use get_report("countries", after="{{year}}-{{month}}-01", before="{{year}}-{{month}}-31") for geographic data

Create a comprehensive report with:
- Executive summary of key metrics
- Traffic trends and growth patterns
- User demographics and behavior
- Content performance analysis
- Geographic distribution insights
- Month-over-month comparisons (if available)
- Recommendations for the next month"#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            optional_arg("month", "Two-digit month, e.g. \"03\" (default: 01)"),
            optional_arg("year", "Four-digit year (default: 2024)"),
        ]
    }

    /// Month and year default together: if either is missing, both reset.
    fn apply_defaults(arguments: &mut HashMap<String, String>) {
        let missing = |key: &str| arguments.get(key).is_none_or(|v| v.is_empty());
        if missing("month") || missing("year") {
            arguments.insert("month".to_string(), DEFAULT_MONTH.to_string());
            arguments.insert("year".to_string(), DEFAULT_YEAR.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults(pairs: &[(&str, &str)]) -> (String, String) {
        let mut args: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        MonthlyReportPrompt::apply_defaults(&mut args);
        (args["month"].clone(), args["year"].clone())
    }

    #[test]
    fn test_both_given() {
        assert_eq!(
            defaults(&[("month", "03"), ("year", "2025")]),
            ("03".to_string(), "2025".to_string())
        );
    }

    #[test]
    fn test_either_missing_resets_both() {
        let expected = ("01".to_string(), "2024".to_string());
        assert_eq!(defaults(&[("month", "03")]), expected);
        assert_eq!(defaults(&[("year", "2025")]), expected);
        assert_eq!(defaults(&[("month", ""), ("year", "2025")]), expected);
        assert_eq!(defaults(&[]), expected);
    }
}
