//! Prompt Registry - central registration of all prompts.
//!
//! When adding a new prompt, create it in `definitions/`, export it in
//! `definitions/mod.rs` and register it here.

use super::definitions::{
    AnalyzeTrafficPrompt, CompareReportsPrompt, MonthlyReportPrompt, PromptDefinition,
    RealtimeInsightsPrompt,
};
use super::templates::PromptTemplate;

/// Build a PromptTemplate from a PromptDefinition.
fn build_template<P: PromptDefinition>() -> PromptTemplate {
    PromptTemplate {
        name: P::NAME.to_string(),
        description: Some(P::DESCRIPTION.to_string()),
        arguments: P::arguments(),
        template: P::template().to_string(),
        defaults: P::apply_defaults,
    }
}

/// Get all registered prompts as PromptTemplates, in listing order.
pub fn get_all_prompts() -> Vec<PromptTemplate> {
    vec![
        build_template::<AnalyzeTrafficPrompt>(),
        build_template::<CompareReportsPrompt>(),
        build_template::<MonthlyReportPrompt>(),
        build_template::<RealtimeInsightsPrompt>(),
    ]
}

/// Get the list of all prompt names.
pub fn prompt_names() -> Vec<&'static str> {
    vec![
        AnalyzeTrafficPrompt::NAME,
        CompareReportsPrompt::NAME,
        MonthlyReportPrompt::NAME,
        RealtimeInsightsPrompt::NAME,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_prompts() {
        let prompts = get_all_prompts();
        let names: Vec<_> = prompts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, prompt_names());
        assert_eq!(
            names,
            vec![
                "analyze-traffic",
                "compare-reports",
                "monthly-report",
                "realtime-insights"
            ]
        );
    }

    #[test]
    fn test_arguments_are_optional() {
        for prompt in get_all_prompts() {
            assert!(prompt.arguments.iter().all(|a| a.required == Some(false)));
        }
    }
}
