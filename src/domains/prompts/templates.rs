//! Prompt templates and the renderer.
//!
//! Syntax:
//! - `{{variable}}` is replaced with the argument value, or removed if unset
//! - `{{#if variable}}content{{/if}}` keeps content only if variable is non-empty
//! - `{{#if variable}}content{{else}}alternative{{/if}}`
//!
//! Conditionals do not nest. Substituted values are not re-scanned.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;

const IF_OPEN: &str = "{{#if ";
const ELSE: &str = "{{else}}";
const IF_CLOSE: &str = "{{/if}}";

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with placeholders.
    pub template: String,

    /// Fills in defaults before rendering.
    pub defaults: fn(&mut HashMap<String, String>),
}

impl PromptTemplate {
    /// Create a new prompt template with no defaults.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            arguments,
            template: template.into(),
            defaults: |_| {},
        }
    }

    /// Apply defaults to `arguments`, then render.
    pub fn instantiate(&self, mut arguments: HashMap<String, String>) -> Result<String, PromptError> {
        (self.defaults)(&mut arguments);
        self.render(&arguments)
    }

    /// Render the template with the given arguments.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let expanded = expand_conditionals(&self.template, arguments)?;
        Ok(substitute(&expanded, arguments))
    }
}

fn is_set(arguments: &HashMap<String, String>, name: &str) -> bool {
    arguments.get(name).is_some_and(|v| !v.is_empty())
}

fn expand_conditionals(
    template: &str,
    arguments: &HashMap<String, String>,
) -> Result<String, PromptError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(IF_OPEN) {
        out.push_str(&rest[..start]);

        let tag = &rest[start + IF_OPEN.len()..];
        let tag_end = tag
            .find("}}")
            .ok_or_else(|| PromptError::template("Unclosed {{#if}} tag"))?;
        let name = tag[..tag_end].trim();

        let body = &tag[tag_end + 2..];
        let body_end = body
            .find(IF_CLOSE)
            .ok_or_else(|| PromptError::template("Missing {{/if}} tag"))?;
        let block = &body[..body_end];

        let (then_part, else_part) = block.split_once(ELSE).unwrap_or((block, ""));
        out.push_str(if is_set(arguments, name) {
            then_part
        } else {
            else_part
        });

        rest = &body[body_end + IF_CLOSE.len()..];
    }

    out.push_str(rest);
    Ok(out)
}

fn substitute(template: &str, arguments: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let tag = &rest[start + 2..];
        match tag.find("}}") {
            Some(end) => {
                if let Some(value) = arguments.get(tag[..end].trim()) {
                    out.push_str(value);
                }
                rest = &tag[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn render(template: &str, arguments: &HashMap<String, String>) -> String {
        PromptTemplate::new("test", None, vec![], template)
            .render(arguments)
            .unwrap()
    }

    #[test]
    fn test_simple_substitution() {
        assert_eq!(
            render("Compare {{a}} and {{b}}, then {{a}} again", &args(&[("a", "devices"), ("b", "browsers")])),
            "Compare devices and browsers, then devices again"
        );
    }

    #[test]
    fn test_unset_placeholder_removed() {
        assert_eq!(render("Report: {{name}}.", &args(&[])), "Report: .");
    }

    #[test]
    fn test_values_not_rescanned() {
        assert_eq!(
            render("{{a}}", &args(&[("a", "{{b}}"), ("b", "x")])),
            "{{b}}"
        );
    }

    #[test]
    fn test_conditional_with_value() {
        assert_eq!(
            render("Hello{{#if name}}, {{name}}{{/if}}!", &args(&[("name", "World")])),
            "Hello, World!"
        );
    }

    #[test]
    fn test_conditional_empty_is_unset() {
        assert_eq!(
            render("Hello{{#if name}}, {{name}}{{/if}}!", &args(&[("name", "")])),
            "Hello!"
        );
    }

    #[test]
    fn test_conditional_with_else() {
        let template = "for {{#if range}}{{range}}{{else}}last 30 days{{/if}}";
        assert_eq!(render(template, &args(&[])), "for last 30 days");
        assert_eq!(render(template, &args(&[("range", "Q1")])), "for Q1");
    }

    #[test]
    fn test_unbalanced_tags() {
        let template = PromptTemplate::new("test", None, vec![], "{{#if a}}no end");
        assert!(matches!(
            template.render(&HashMap::new()),
            Err(PromptError::TemplateError(_))
        ));

        let template = PromptTemplate::new("test", None, vec![], "{{#if a");
        assert!(template.render(&HashMap::new()).is_err());
    }

    #[test]
    fn test_instantiate_applies_defaults() {
        let mut template = PromptTemplate::new("test", None, vec![], "Hi {{who}}");
        template.defaults = |a| {
            a.entry("who".to_string()).or_insert_with(|| "there".to_string());
        };
        assert_eq!(template.instantiate(HashMap::new()).unwrap(), "Hi there");
        assert_eq!(
            template.instantiate(args(&[("who", "Ada")])).unwrap(),
            "Hi Ada"
        );
    }
}
