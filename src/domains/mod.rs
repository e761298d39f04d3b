//! Domain logic behind the MCP surface.
//!
//! `search` talks to the documentation endpoint; `tools` and `prompts` adapt
//! it to the two MCP entry points.

pub mod prompts;
pub mod search;
pub mod tools;
