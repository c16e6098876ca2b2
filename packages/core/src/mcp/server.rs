//! MCP HTTP Server
//!
//! JSON-RPC 2.0 over a single POST endpoint, plus a health probe. Each
//! inbound request is handled as one independent task and produces exactly
//! one JSON response; the router never retries or queues.

use super::handlers::{initialize, tools};
use super::registry::ToolRegistry;
use super::types::{RpcError, RpcRequest, RpcResponse};
use crate::error::format_panic;
use axum::extract::State;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use futures::FutureExt;
use serde_json::{json, Value};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

/// Shared state for the HTTP transport.
///
/// The registry is immutable after startup; cloning the state only bumps
/// reference counts.
#[derive(Clone)]
struct AppState {
    registry: Arc<ToolRegistry>,
}

/// Build the axum router exposing the MCP endpoint and the health probe.
pub fn create_router(registry: Arc<ToolRegistry>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/mcp/v1", post(mcp_endpoint))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { registry })
}

/// Start the MCP HTTP server. Blocks until Ctrl-C.
pub async fn serve(registry: Arc<ToolRegistry>, port: u16) -> anyhow::Result<()> {
    let app = create_router(registry);
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("MCP server running on port {}", port);
    info!("Endpoint: http://localhost:{}/mcp/v1", port);
    info!("Health check: http://localhost:{}/health", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("MCP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutting down...");
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "service": initialize::SERVER_NAME }))
}

async fn mcp_endpoint(State(state): State<AppState>, body: String) -> Json<RpcResponse> {
    let request: RpcRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("Failed to parse JSON-RPC request: {}", e);
            return Json(RpcResponse::error(
                Value::Null,
                RpcError::parse_error(format!("Invalid JSON: {}", e)),
            ));
        }
    };

    Json(handle_request(&state.registry, request).await)
}

/// Dispatch one JSON-RPC request to the protocol handlers.
///
/// Recognized methods: `initialize`, `tools/list`, `tools/call`. Anything
/// else (including a request with no method at all) yields an error
/// envelope rather than an exception.
pub async fn handle_request(registry: &ToolRegistry, request: RpcRequest) -> RpcResponse {
    let id = request.id.clone();
    let method = match request.method.as_deref() {
        Some(method) => method,
        None => {
            warn!("JSON-RPC request without a method");
            return RpcResponse::error(id, RpcError::invalid_request("Invalid Request"));
        }
    };

    debug!("MCP request: {}", method);

    match method {
        "initialize" => RpcResponse::success(id, initialize::handle_initialize(request.params)),
        "tools/list" => RpcResponse::success(id, tools::handle_tools_list(request.params)),
        "tools/call" => handle_tools_call(registry, id, request.params).await,
        other => {
            warn!("Unknown MCP method: {}", other);
            RpcResponse::error(
                id,
                RpcError::dispatch_failed(format!("Method '{}' not found", other)),
            )
        }
    }
}

async fn handle_tools_call(registry: &ToolRegistry, id: Value, params: Value) -> RpcResponse {
    let tool_name = match params.get("name").and_then(Value::as_str) {
        Some(name) => name.to_string(),
        None => {
            return RpcResponse::error(id, RpcError::dispatch_failed("Tool name is required"));
        }
    };

    let handler = match registry.get(&tool_name) {
        Some(handler) => handler.clone(),
        None => {
            warn!("Unknown tool: {}", tool_name);
            return RpcResponse::error(
                id,
                RpcError::dispatch_failed(format!("Tool '{}' not found", tool_name)),
            );
        }
    };
    let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

    match AssertUnwindSafe(handler(arguments)).catch_unwind().await {
        Ok(result) => {
            debug!(
                "Tool '{}' completed (isError: {})",
                tool_name,
                result.failed()
            );
            match serde_json::to_value(&result) {
                Ok(value) => RpcResponse::success(id, value),
                Err(e) => {
                    error!("Failed to serialize result for '{}': {}", tool_name, e);
                    RpcResponse::error(
                        id,
                        RpcError::internal_error(format!("Serialization failed: {}", e)),
                    )
                }
            }
        }
        Err(payload) => {
            error!("Tool '{}' panicked", tool_name);
            RpcResponse::error(
                id,
                RpcError::internal_error(format_panic(payload.as_ref())),
            )
        }
    }
}
