//! MCP Initialize Handler
//!
//! Handles the MCP initialization handshake. This is the first method
//! called when a client connects; the payload is fixed and the handler has
//! no side effects.

use serde_json::{json, Value};

/// Protocol revision this server speaks
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Server identity reported in the handshake and the health probe
pub const SERVER_NAME: &str = "datascope-mcp-server";

/// Handle MCP initialize request
///
/// Returns the protocol version, the tools capability, and the server
/// identity. Tool schemas themselves are retrieved via tools/list.
pub fn handle_initialize(_params: Value) -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {}
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

// Include tests
#[cfg(test)]
#[path = "initialize_test.rs"]
mod initialize_test;
