//! Transports serving the MCP handler.
//!
//! - **stdio**: one session over stdin/stdout, the default
//! - **http**: rmcp streamable HTTP on an axum router (feature `http`),
//!   with optional auto-reload during development
//!
//! [`TransportService`] picks one from [`TransportConfig`] and reports why it
//! stopped through [`Shutdown`].

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub mod reload;

pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::{Shutdown, TransportService};

#[cfg(feature = "http")]
pub use config::HttpConfig;
