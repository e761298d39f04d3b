//! STDIO transport implementation.
//!
//! stdout carries the MCP stream, so nothing else may write to it; logging
//! goes to stderr.

use rmcp::ServiceExt;
use tracing::{error, info};

use super::{TransportError, TransportResult};
use crate::core::McpServer;

pub struct StdioTransport;

impl StdioTransport {
    /// Serve `server` on stdin/stdout until the peer closes the stream.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let session = server
            .serve(rmcp::transport::stdio())
            .await
            .inspect_err(|e| error!("MCP handshake over stdio failed: {:?}", e))
            .map_err(TransportError::handshake)?;

        let reason = session.waiting().await.map_err(TransportError::session)?;

        info!("STDIO session closed: {:?}", reason);
        Ok(())
    }
}
