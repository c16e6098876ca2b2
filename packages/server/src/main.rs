//! DataScope MCP Server
//!
//! Standalone MCP (Model Context Protocol) server exposing dataset query
//! tools to AI agents. All dataset access is routed through the
//! authenticated DataScope Gateway, which owns storage and per-user access
//! control.
//!
//! Architecture:
//!   AI Agent -> HTTP (/mcp/v1) -> Tool Registry -> Gateway Client -> Gateway
//!
//! # Configuration
//!
//! Loaded from the environment (a local `.env` file is honored):
//!
//! - `DATASCOPE_GATEWAY_URL` - Gateway base URL (default http://localhost:8887)
//! - `DATASCOPE_API_TOKEN` - bearer credential for Gateway calls
//! - `MCP_PORT` - HTTP port (default 3100)

mod config;

use config::ServerConfig;
use datascope_core::{GatewayClient, ToolRegistry};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "datascope_server=info,datascope_core=info".into()),
        )
        .init();

    let config = ServerConfig::from_env();

    info!("Starting DataScope MCP Server...");
    info!("Gateway URL: {}", config.gateway_url);
    info!("Port: {}", config.port);
    if config.api_token.is_none() {
        warn!(
            "DATASCOPE_API_TOKEN not set. The server will start, but Gateway \
             calls will fail until it is configured."
        );
    }

    let gateway = Arc::new(GatewayClient::new(
        config.gateway_url.clone(),
        config.api_token.clone(),
    ));
    let registry = Arc::new(ToolRegistry::new(gateway));
    info!("Registered tools: {}", registry.names().join(", "));

    datascope_core::mcp::serve(registry, config.port).await
}
