//! Prompt definitions.
//!
//! A definition carries the metadata shown by `prompts/list`; rendering is
//! an inherent method on each prompt type since it needs the search backend.

use rmcp::model::PromptArgument;

pub mod search_docs;

pub use search_docs::SearchDocsPrompt;

/// Static metadata for a prompt.
pub trait PromptDefinition {
    const NAME: &'static str;
    const DESCRIPTION: &'static str;

    fn arguments() -> Vec<PromptArgument>;
}
