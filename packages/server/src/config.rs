//! Runtime Server Configuration
//!
//! Built once at startup from the environment (after `.env` loading) and
//! immutable for the process lifetime. For the Gateway wire contract itself
//! see `datascope_core::gateway`.

/// Runtime configuration for the MCP server process.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Base URL of the DataScope Gateway
    pub gateway_url: String,

    /// Bearer credential for Gateway calls; None when unset or blank
    pub api_token: Option<String>,

    /// HTTP port the MCP server listens on
    pub port: u16,
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// Missing variables fall back to development defaults; a missing token
    /// is surfaced by the Gateway client on first use, not here.
    pub fn from_env() -> Self {
        let gateway_url = std::env::var("DATASCOPE_GATEWAY_URL")
            .unwrap_or_else(|_| "http://localhost:8887".to_string());
        let api_token = std::env::var("DATASCOPE_API_TOKEN")
            .ok()
            .filter(|token| !token.is_empty());
        let port = std::env::var("MCP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3100);

        Self {
            gateway_url,
            api_token,
            port,
        }
    }
}
