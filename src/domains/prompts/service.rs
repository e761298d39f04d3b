//! Prompt service implementation.
//!
//! The PromptService lists the registered prompts and renders them against
//! the shared search backend.

use rmcp::model::{GetPromptResult, Prompt};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use super::definitions::{PromptDefinition, SearchDocsPrompt};
use super::error::PromptError;
use super::registry::get_all_prompts;
use crate::domains::search::DocumentationSearch;

/// Service for listing and rendering prompts.
pub struct PromptService {
    /// Backend used by search-driven prompts.
    search: Arc<dyn DocumentationSearch>,

    /// Registry of available prompts.
    /// Key: prompt name, Value: listed prompt
    prompts: HashMap<String, Prompt>,
}

impl PromptService {
    /// Create a new PromptService bound to the given search backend.
    pub fn new(search: Arc<dyn DocumentationSearch>) -> Self {
        info!("Initializing PromptService");

        let prompts = get_all_prompts()
            .into_iter()
            .map(|prompt| {
                info!("Registering prompt: {}", prompt.name);
                (prompt.name.clone(), prompt)
            })
            .collect();

        Self { search, prompts }
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts.values().cloned().collect()
    }

    /// Render a prompt by name.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        if !self.prompts.contains_key(name) {
            return Err(PromptError::not_found(name));
        }

        let arguments = arguments.unwrap_or_default();

        match name {
            SearchDocsPrompt::NAME => {
                SearchDocsPrompt::render(self.search.as_ref(), &arguments).await
            }
            _ => Err(PromptError::not_found(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::search::SearchError;
    use async_trait::async_trait;

    struct EchoBackend;

    #[async_trait]
    impl DocumentationSearch for EchoBackend {
        async fn search(&self, query: &str) -> Result<String, SearchError> {
            Ok(query.to_string())
        }
    }

    fn service() -> PromptService {
        PromptService::new(Arc::new(EchoBackend))
    }

    #[tokio::test]
    async fn test_prompt_service_creation() {
        let prompts = service().list_prompts().await;
        assert_eq!(prompts.len(), 1);
    }

    #[tokio::test]
    async fn test_get_prompt_with_arguments() {
        let mut args = HashMap::new();
        args.insert("query".to_string(), "webhooks".to_string());

        let result = service()
            .get_prompt("search_owlpay_documentation", Some(args))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_get_prompt_missing_required_argument() {
        let result = service()
            .get_prompt("search_owlpay_documentation", None)
            .await;
        assert!(matches!(result, Err(PromptError::MissingArgument(_))));
    }

    #[tokio::test]
    async fn test_get_nonexistent_prompt() {
        let result = service().get_prompt("nonexistent", None).await;
        assert!(matches!(result, Err(PromptError::NotFound(_))));
    }
}
