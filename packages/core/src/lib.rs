//! DataScope Core Business Logic Layer
//!
//! This crate provides the query translation, Gateway access, and MCP
//! protocol layer for the DataScope dataset exploration server.
//!
//! # Architecture
//!
//! - **Gateway-backed**: all dataset storage and access control live behind
//!   the authenticated DataScope Gateway; this crate never reads a store
//!   directly
//! - **Per-request values**: filters, envelopes, and RPC messages are
//!   transient value objects that never outlive one request
//! - **Immutable registry**: the tool registry is built once at startup and
//!   shared read-only across concurrent requests
//!
//! # Modules
//!
//! - [`models`] - Data structures (Filter, Sort, Aggregation, ToolResult)
//! - [`query`] - Translation of structured filters into the store selector form
//! - [`utils`] - Type inference and result formatting
//! - [`gateway`] - Authenticated HTTP client for the DataScope Gateway
//! - [`mcp`] - MCP HTTP server for AI agent integration
//! - [`error`] - Dataset error taxonomy with stable codes

pub mod error;
pub mod gateway;
pub mod mcp;
pub mod models;
pub mod query;
pub mod utils;

// Re-export commonly used types
pub use error::{format_error, DatasetError};
pub use gateway::{GatewayClient, GatewayError};
pub use mcp::ToolRegistry;
pub use models::{Filter, FilterOp, Sort, SortDirection, ToolResult};
