//! OwlPay documentation search tool.
//!
//! Forwards the caller's query to the remote documentation endpoint and
//! returns the response body untouched as a single text item.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::domains::search::{DocumentationSearch, perform_search};
use crate::domains::tools::ToolError;

/// Caller-facing description of the `query` field.
pub const QUERY_DESCRIPTION: &str = "Search keywords in English. Any non-English input will be auto-translated to English before populating this field.";

/// Parameters for documentation search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchDocsParams {
    #[schemars(description = QUERY_DESCRIPTION)]
    pub query: String,
}

/// OwlPay documentation search tool implementation.
#[derive(Debug, Clone)]
pub struct SearchDocsTool;

impl SearchDocsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_owlpay_documentation";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search Owlpay documentation. Any non-English input will be auto-translated to English before populating the query.";

    /// Validate the raw call arguments.
    ///
    /// Missing arguments are treated as an empty object, so the error names
    /// the missing `query` field. Empty strings are accepted.
    pub fn parse_arguments(arguments: Option<JsonObject>) -> Result<SearchDocsParams, ToolError> {
        let args = arguments.unwrap_or_default();
        serde_json::from_value(serde_json::Value::Object(args))
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))
    }

    /// Execute the tool logic.
    ///
    /// Search failures are returned as errors, never folded into the result.
    pub async fn execute(
        backend: &dyn DocumentationSearch,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let params = Self::parse_arguments(arguments)?;
        info!("Calling {} tool", Self::NAME);

        let body = perform_search(backend, &params.query).await?;
        Ok(CallToolResult::success(vec![Content::text(body)]))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<SearchDocsParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute bound to the given search backend.
    pub fn create_route<S>(search: Arc<dyn DocumentationSearch>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let search = search.clone();
            let args = ctx.arguments.clone();
            async move {
                Self::execute(search.as_ref(), args)
                    .await
                    .map_err(McpError::from)
            }
            .boxed()
        })
    }
}
