//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services. The same handler is
//! served by every transport.
//!
//! ## Ownership
//!
//! The search backend is created once, outside the handler, and injected as
//! an `Arc<dyn DocumentationSearch>`. Cloning the server (the HTTP transport
//! does this per request) shares the backend instead of opening a new one.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error;
use crate::domains::{
    prompts::PromptService,
    search::{DocumentationSearch, SearchClient},
    tools::build_tool_router,
};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between the tool and prompt surfaces.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for handling prompt-related requests.
    prompt_service: Arc<PromptService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server around an existing search backend.
    pub fn new(config: Config, search: Arc<dyn DocumentationSearch>) -> Self {
        let config = Arc::new(config);
        let prompt_service = Arc::new(PromptService::new(search.clone()));

        Self {
            tool_router: build_tool_router::<Self>(search),
            config,
            prompt_service,
        }
    }

    /// Create a new MCP server backed by the HTTP search client.
    pub fn from_config(config: Config) -> error::Result<Self> {
        let client = SearchClient::new(&config.search)?;
        info!("Documentation endpoint: {}", client.api_url());

        Ok(Self::new(config, Arc::new(client)))
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }
}

/// Flatten prompt arguments into strings.
///
/// Non-string values are kept in their JSON form rather than dropped, so a
/// numeric query still counts as present.
fn prompt_arguments(arguments: Option<JsonObject>) -> Option<HashMap<String, String>> {
    arguments.map(|map| {
        map.into_iter()
            .map(|(k, v)| match v {
                serde_json::Value::String(s) => (k, s),
                other => (k, other.to_string()),
            })
            .collect()
    })
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "This server searches the OwlPay documentation. Use the \
                 'search_owlpay_documentation' tool (or prompt) with English keywords; \
                 translate non-English questions to English before filling in 'query'."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        let prompts = self.prompt_service.list_prompts().await;
        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        self.prompt_service
            .get_prompt(&request.name, prompt_arguments(request.arguments))
            .await
            .map_err(McpError::from)
    }
}
