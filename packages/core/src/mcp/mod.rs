//! Model Context Protocol (MCP) Integration
//!
//! JSON-RPC 2.0 protocol layer exposing the dataset tools to AI agents over
//! HTTP.
//!
//! # Architecture
//!
//! - **Immutable registry**: the five dataset tools are registered once at
//!   startup into a read-only map shared by all requests
//! - **Uniform envelopes**: tool handlers always return a result envelope;
//!   failures are `isError: true` text, never protocol faults
//! - **HTTP transport**: one POST endpoint plus a health probe; every
//!   inbound request produces exactly one JSON response
//!
//! # Usage
//!
//! AI agents send JSON-RPC requests to `/mcp/v1`:
//!
//! ```json
//! {
//!   "jsonrpc": "2.0",
//!   "id": 1,
//!   "method": "tools/call",
//!   "params": {
//!     "name": "query_dataset",
//!     "arguments": { "dataset_name": "orders", "max_rows": 50 }
//!   }
//! }
//! ```

pub mod handlers;
pub mod registry;
pub mod server;
pub mod types;

pub use registry::ToolRegistry;
pub use server::{create_router, handle_request, serve};
pub use types::{RpcError, RpcRequest, RpcResponse};
