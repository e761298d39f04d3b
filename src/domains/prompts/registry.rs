//! Prompt Registry - central registration of all prompts.
//!
//! When adding a new prompt:
//! 1. Create the prompt file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_prompts()`

use rmcp::model::Prompt;

use super::definitions::{PromptDefinition, SearchDocsPrompt};

/// Build the listed Prompt model from a PromptDefinition.
fn build_prompt<P: PromptDefinition>() -> Prompt {
    Prompt {
        name: P::NAME.to_string(),
        title: None,
        description: Some(P::DESCRIPTION.to_string()),
        arguments: Some(P::arguments()),
        icons: None,
        meta: None,
    }
}

/// Get all registered prompts.
///
/// This is the central place where all prompts are registered.
pub fn get_all_prompts() -> Vec<Prompt> {
    vec![build_prompt::<SearchDocsPrompt>()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_prompts() {
        let prompts = get_all_prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].name, "search_owlpay_documentation");
        assert_eq!(prompts[0].arguments.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_listed_prompt_description() {
        let prompts = get_all_prompts();
        assert_eq!(
            prompts[0].description.as_deref(),
            Some("Search Owlpay documentation and return matching sections")
        );
    }
}
