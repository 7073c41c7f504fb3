//! Prompt-specific error types.

use thiserror::Error;

/// Errors returned when fetching a prompt.
///
/// Prompt arguments are all optional, so a missing value is filled from the
/// prompt's defaults and never reported here.
#[derive(Debug, Error)]
pub enum PromptError {
    /// No prompt is registered under this name.
    #[error("Prompt not found: {0}")]
    NotFound(String),

    /// The prompt template has unbalanced `{{#if}}` sections.
    #[error("Template error: {0}")]
    TemplateError(String),
}

impl PromptError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn template(msg: impl Into<String>) -> Self {
        Self::TemplateError(msg.into())
    }
}
