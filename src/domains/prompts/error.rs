//! Errors raised while resolving or rendering a prompt.
//!
//! Search failures are not represented here: a prompt reports them inside
//! its result.

use rmcp::ErrorData as McpError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    /// No prompt is registered under this name.
    #[error("Unknown prompt: {0}")]
    NotFound(String),

    /// A required prompt argument was not supplied.
    #[error("Missing required argument '{0}'")]
    MissingArgument(&'static str),
}

impl PromptError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn missing_argument(arg: &'static str) -> Self {
        Self::MissingArgument(arg)
    }
}

/// Both variants are caller mistakes.
impl From<PromptError> for McpError {
    fn from(err: PromptError) -> Self {
        let data = match &err {
            PromptError::NotFound(name) => serde_json::json!({ "prompt": name }),
            PromptError::MissingArgument(arg) => serde_json::json!({ "argument": arg }),
        };
        McpError::invalid_params(err.to_string(), Some(data))
    }
}
