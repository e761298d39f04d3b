//! Prompts domain module.
//!
//! Renders a documentation search as conversational message content. A
//! failed search still produces a normal prompt result, which is the main
//! difference from the tool surface.
//!
//! ## Architecture
//!
//! - `definitions/` - Prompt definitions and their rendering
//! - `registry.rs` - The list returned by `prompts/list`
//! - `service.rs` - Name lookup and dispatch for `prompts/get`

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::PromptDefinition;
pub use error::PromptError;
pub use registry::get_all_prompts;
pub use service::PromptService;
