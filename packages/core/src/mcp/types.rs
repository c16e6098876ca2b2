//! MCP JSON-RPC 2.0 Types
//!
//! Type definitions for Model Context Protocol communication over the HTTP
//! transport.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 request structure
///
/// Every field is optional at the deserialization layer so a malformed
/// request still reaches the router and receives a proper error envelope
/// instead of a transport-level rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcRequest {
    /// Request identifier (echoed in the response; null when absent)
    #[serde(default)]
    pub id: Value,

    /// Method name to invoke
    #[serde(default)]
    pub method: Option<String>,

    /// Method parameters as JSON value
    #[serde(default)]
    pub params: Value,
}

/// JSON-RPC 2.0 response structure
///
/// Exactly one of `result`/`error` is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    /// JSON-RPC version (always "2.0")
    pub jsonrpc: String,

    /// Request identifier (matches request, null when it had none)
    pub id: Value,

    /// Success result (mutually exclusive with error)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// Error information (mutually exclusive with result)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

/// JSON-RPC 2.0 error structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcError {
    /// Standard JSON-RPC error code
    pub code: i32,

    /// Human-readable error message
    pub message: String,
}

// JSON-RPC 2.0 standard error codes
pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
/// Shared by "method not found" and failed tool dispatch (inherited contract)
pub const DISPATCH_FAILED: i32 = -32601;
pub const INTERNAL_ERROR: i32 = -32603;

impl RpcError {
    /// Create a parse error
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self {
            code: PARSE_ERROR,
            message: message.into(),
        }
    }

    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            code: INVALID_REQUEST,
            message: message.into(),
        }
    }

    /// Create a dispatch failure (unknown method or tool lookup failure)
    pub fn dispatch_failed(message: impl Into<String>) -> Self {
        Self {
            code: DISPATCH_FAILED,
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self {
            code: INTERNAL_ERROR,
            message: message.into(),
        }
    }
}

impl RpcResponse {
    /// Create a success response
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(id: Value, error: RpcError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

// Include tests
#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
