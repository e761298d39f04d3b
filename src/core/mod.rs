//! Server infrastructure shared by every transport.
//!
//! Holds configuration, the crate-wide error type, the MCP handler and the
//! stdio/HTTP transports that serve it.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{Shutdown, TransportConfig, TransportService};
