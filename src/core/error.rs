//! Crate-level error type.
//!
//! Tool and prompt failures never reach this level: they are converted into
//! MCP error responses (or prompt results) inside the handler. What remains
//! are the failures that stop the server from starting or running.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The outbound search client could not be set up.
    #[error("Search client error: {0}")]
    Search(#[from] crate::domains::search::SearchError),

    /// A transport failed to start or stopped abnormally.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}
