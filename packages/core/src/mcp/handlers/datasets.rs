//! list_datasets Tool Handler

use crate::error::format_error;
use crate::gateway::GatewayClient;
use crate::models::ToolResult;
use anyhow::Result;
use serde_json::{json, Value};

/// Handle list_datasets: enumerate the datasets visible to the configured
/// credential. Takes no arguments.
pub async fn handle_list_datasets(gateway: &GatewayClient, _params: Value) -> ToolResult {
    match list_datasets(gateway).await {
        Ok(result) => result,
        Err(err) => ToolResult::error(format!("Error listing datasets: {}", format_error(&err))),
    }
}

async fn list_datasets(gateway: &GatewayClient) -> Result<ToolResult> {
    let response = gateway.list_datasets().await?;

    let no_entries = Vec::new();
    let db_list = response
        .get("dbList")
        .and_then(Value::as_array)
        .unwrap_or(&no_entries);
    let names: Vec<&str> = db_list
        .iter()
        .filter_map(|entry| entry.get("name").and_then(Value::as_str))
        .collect();

    let joined = if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    };
    let text = format!("Datasets ({}): {}", names.len(), joined);
    let structured = json!({ "datasets": names, "dbList": db_list });

    Ok(ToolResult::with_structured(text, structured))
}

// Include tests
#[cfg(test)]
#[path = "datasets_test.rs"]
mod datasets_test;
