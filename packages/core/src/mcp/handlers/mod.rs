//! MCP Request Handlers
//!
//! Handler modules for the protocol methods and the five dataset tools.
//! Tool handlers are isolation boundaries: every code path returns a result
//! envelope, and failures become `isError: true` text via `format_error`.

pub mod aggregate;
pub mod datasets;
pub mod initialize;
pub mod query;
pub mod sample;
pub mod schema;
pub mod tools;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Deserialize raw tool arguments into a typed parameter struct.
///
/// Parameter structs reject unknown fields, so extra arguments fail here
/// rather than being silently dropped.
pub(crate) fn parse_params<T: DeserializeOwned>(params: Value) -> anyhow::Result<T> {
    serde_json::from_value(params).map_err(|e| anyhow::anyhow!("Invalid parameters: {}", e))
}
