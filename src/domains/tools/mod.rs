//! Tools domain module.
//!
//! Exposes the documentation search as an MCP tool. Failures are reported as
//! protocol errors: `INVALID_PARAMS` for bad arguments and `INTERNAL_ERROR`
//! for a failed search.
//!
//! ## Architecture
//!
//! - `definitions/` - Tool implementations (one file per tool)
//! - `router.rs` - Builds the `ToolRouter` used by the server handler
//! - `error.rs` - Tool errors and their mapping to `ErrorData`

pub mod definitions;
mod error;
pub mod router;

pub use error::ToolError;
pub use router::build_tool_router;
