//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool knows how to create its own route; this module only wires them
//! to the shared search backend.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::SearchDocsTool;
use crate::domains::search::DocumentationSearch;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(search: Arc<dyn DocumentationSearch>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new().with_route(SearchDocsTool::create_route(search))
}
