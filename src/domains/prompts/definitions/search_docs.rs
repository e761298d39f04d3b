//! Documentation search prompt definition.
//!
//! Unlike the tool of the same name, a failed search is reported inside a
//! regular prompt result instead of a protocol error.

use rmcp::model::{GetPromptResult, PromptArgument, PromptMessage, PromptMessageRole};
use std::collections::HashMap;
use tracing::warn;

use super::PromptDefinition;
use crate::domains::prompts::PromptError;
use crate::domains::search::{DocumentationSearch, failure_message, perform_search};
use crate::domains::tools::definitions::QUERY_DESCRIPTION;

/// Search the OwlPay documentation and render the matches as a user message.
pub struct SearchDocsPrompt;

impl SearchDocsPrompt {
    /// Description attached to a successful result.
    pub const SUCCESS_DESCRIPTION: &'static str = "Search results";

    /// Description attached to a failed search.
    pub const FAILURE_DESCRIPTION: &'static str = "Search failed";

    /// Render the prompt.
    ///
    /// Only a missing `query` is an error; search failures become a result
    /// whose description is [`Self::FAILURE_DESCRIPTION`].
    pub async fn render(
        backend: &dyn DocumentationSearch,
        arguments: &HashMap<String, String>,
    ) -> Result<GetPromptResult, PromptError> {
        let query = arguments
            .get("query")
            .ok_or_else(|| PromptError::missing_argument("query"))?;

        let (description, text) = match perform_search(backend, query).await {
            Ok(body) => (Self::SUCCESS_DESCRIPTION, body),
            Err(e) => {
                warn!("Rendering failed search into prompt result");
                (Self::FAILURE_DESCRIPTION, failure_message(&e))
            }
        };

        Ok(GetPromptResult {
            description: Some(description.to_string()),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
        })
    }
}

impl PromptDefinition for SearchDocsPrompt {
    const NAME: &'static str = "search_owlpay_documentation";
    const DESCRIPTION: &'static str = "Search Owlpay documentation and return matching sections";

    fn arguments() -> Vec<PromptArgument> {
        vec![PromptArgument {
            name: "query".to_string(),
            title: None,
            description: Some(QUERY_DESCRIPTION.to_string()),
            required: Some(true),
        }]
    }
}
