//! MCP Server Entry Point
//!
//! This is the main entry point for the MCP server. It parses the command
//! line, initializes logging, loads configuration, and starts the server with
//! the selected transport.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use owlpay_mcp_server::core::{Config, McpServer, Shutdown, TransportConfig, TransportService};

#[cfg(feature = "http")]
use owlpay_mcp_server::core::transport::{HttpConfig, reload};

/// Search the OwlPay documentation over MCP.
#[derive(Parser, Debug)]
#[command(name = "owlpay-mcp-server")]
#[command(author, version, about, long_about = None)]
#[cfg_attr(not(feature = "http"), allow(dead_code))]
struct Cli {
    /// Host to bind to (HTTP mode).
    #[arg(long, env = "MCP_HTTP_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to bind to (HTTP mode).
    #[arg(long, env = "MCP_HTTP_PORT", default_value_t = 5000)]
    port: u16,

    /// Restart the server when its executable is rebuilt (HTTP mode).
    #[arg(long)]
    reload: bool,

    /// Run mode: 'mcp' for MCP over stdio, 'uvicorn' for the HTTP server.
    #[arg(long, value_enum, env = "MCP_TRANSPORT", default_value_t = Mode::Mcp)]
    mode: Mode,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// MCP over standard input/output.
    #[value(alias = "stdio")]
    Mcp,
    /// MCP streamable HTTP server.
    #[value(alias = "http")]
    Uvicorn,
}

impl Cli {
    /// Apply command-line choices on top of the environment configuration.
    fn apply(&self, config: &mut Config) -> Result<()> {
        match self.mode {
            Mode::Mcp => config.transport = TransportConfig::stdio(),
            Mode::Uvicorn => config.transport = self.http_transport(&config.transport)?,
        }
        Ok(())
    }

    #[cfg(feature = "http")]
    fn http_transport(&self, current: &TransportConfig) -> Result<TransportConfig> {
        let mut http = match current {
            TransportConfig::Http(existing) => existing.clone(),
            _ => HttpConfig::from_env(),
        };
        http.host = self.host.clone();
        http.port = self.port;
        http.reload = self.reload;
        Ok(TransportConfig::Http(http))
    }

    #[cfg(not(feature = "http"))]
    fn http_transport(&self, _current: &TransportConfig) -> Result<TransportConfig> {
        anyhow::bail!("HTTP mode requires building with the `http` feature")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration from environment, then apply the command line
    let mut config = Config::from_env();
    cli.apply(&mut config)?;

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    if cli.reload && config.transport.is_stdio() {
        warn!("--reload only applies to the HTTP server, ignoring");
    }

    // Create the MCP server (owns the outbound search client)
    let server = McpServer::from_config(config.clone())?;

    info!("Server initialized");

    // Create and run the transport service
    let transport = TransportService::new(config.transport);
    match transport.run(server).await? {
        Shutdown::Completed => info!("Server shutting down"),
        #[cfg(feature = "http")]
        Shutdown::Reload => {
            info!("Relaunching after executable change");
            return Err(reload::relaunch().into());
        }
        #[cfg(not(feature = "http"))]
        Shutdown::Reload => info!("Server shutting down"),
    }

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout carries the MCP stream in stdio mode.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}
