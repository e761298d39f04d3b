//! OwlPay documentation search MCP server.
//!
//! This crate exposes a single capability, searching the OwlPay
//! documentation, through the Model Context Protocol (MCP). The search is a
//! plain HTTP GET against a remote endpoint; the response body is returned
//! to the caller untouched.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **search**: Outbound HTTP client for the documentation endpoint
//!   - **tools**: The `search_owlpay_documentation` tool
//!   - **prompts**: The `search_owlpay_documentation` prompt
//!
//! # Example
//!
//! ```rust,no_run
//! use owlpay_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::from_config(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
