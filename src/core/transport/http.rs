//! HTTP transport implementation.
//!
//! Serves the MCP handler through rmcp's streamable HTTP service, mounted on
//! an axum router next to a small health endpoint.
//!
//! The transport runs in stateless mode: every request gets a fresh handler
//! clone and nothing is kept per client between requests. The session
//! manager and the search client are created when the server starts and are
//! released once it has shut down.

use axum::{Json, Router, response::IntoResponse, routing::get};
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use super::{Shutdown, TransportError, TransportResult, config::HttpConfig, reload};
use crate::core::McpServer;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the axum router serving the MCP endpoint.
    pub fn router(&self, server: McpServer, session_manager: Arc<LocalSessionManager>) -> Router {
        let mcp_service = StreamableHttpService::new(
            move || Ok(server.clone()),
            session_manager,
            StreamableHttpServerConfig {
                stateful_mode: false,
                ..Default::default()
            },
        );

        let mut app = Router::new()
            .route("/health", get(health_check))
            .route_service(&self.config.mcp_path, mcp_service);

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        app
    }

    /// Run the HTTP transport until a shutdown signal arrives.
    pub async fn run(self, server: McpServer) -> TransportResult<Shutdown> {
        let addr = self.address();

        let session_manager = Arc::new(LocalSessionManager::default());
        let app = self.router(server, session_manager.clone());

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let shutdown = CancellationToken::new();
        tokio::spawn(cancel_on_signal(shutdown.clone()));

        let reload_requested = Arc::new(AtomicBool::new(false));
        if self.config.reload {
            tokio::spawn(reload::watch_executable(
                shutdown.clone(),
                reload_requested.clone(),
            ));
        }

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!(
            "Ready - listening on {} (MCP streamable HTTP, CORS {})",
            addr, cors_status
        );
        info!("  → MCP:    {}", self.config.mcp_path);
        info!("  → Health: GET /health");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown.clone().cancelled_owned())
            .await
            .map_err(TransportError::Serve)?;

        drop(session_manager);
        info!("HTTP transport stopped, session manager released");

        if reload_requested.load(Ordering::SeqCst) {
            Ok(Shutdown::Reload)
        } else {
            Ok(Shutdown::Completed)
        }
    }
}

/// Cancel the token on Ctrl-C or SIGTERM.
async fn cancel_on_signal(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
        _ = shutdown.cancelled() => return,
    }

    shutdown.cancel();
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
