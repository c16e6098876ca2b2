//! get_schema Tool Handler

use super::parse_params;
use crate::error::format_error;
use crate::gateway::GatewayClient;
use crate::models::ToolResult;
use anyhow::Result;
use serde::Deserialize;
use serde_json::Value;

/// Parameters for get_schema
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GetSchemaParams {
    dataset_name: String,
}

/// Handle get_schema: fetch a dataset's column definitions via the Gateway.
pub async fn handle_get_schema(gateway: &GatewayClient, params: Value) -> ToolResult {
    match get_schema(gateway, params).await {
        Ok(result) => result,
        Err(err) => ToolResult::error(format!("Error getting schema: {}", format_error(&err))),
    }
}

async fn get_schema(gateway: &GatewayClient, params: Value) -> Result<ToolResult> {
    let params: GetSchemaParams = parse_params(params)?;
    if params.dataset_name.trim().is_empty() {
        anyhow::bail!("Dataset name is required");
    }

    let response = gateway.fetch_columns(&params.dataset_name).await?;
    let text = serde_json::to_string_pretty(&response)?;

    Ok(ToolResult::with_structured(text, response))
}

// Include tests
#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;
