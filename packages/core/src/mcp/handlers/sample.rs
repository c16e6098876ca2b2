//! sample_dataset Tool Handler

use super::parse_params;
use crate::error::format_error;
use crate::gateway::GatewayClient;
use crate::models::ToolResult;
use anyhow::Result;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Parameters for sample_dataset
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SampleDatasetParams {
    dataset_name: String,

    #[serde(default)]
    sample_size: Option<u64>,

    #[serde(default)]
    stratify_by: Option<String>,
}

/// Handle sample_dataset: fetch the first page of rows as a sample.
pub async fn handle_sample_dataset(gateway: &GatewayClient, params: Value) -> ToolResult {
    match sample_dataset(gateway, params).await {
        Ok(result) => result,
        Err(err) => ToolResult::error(format!("Error sampling dataset: {}", format_error(&err))),
    }
}

async fn sample_dataset(gateway: &GatewayClient, params: Value) -> Result<ToolResult> {
    let params: SampleDatasetParams = parse_params(params)?;
    if params.dataset_name.trim().is_empty() {
        anyhow::bail!("Dataset name is required");
    }

    let sample_size = params.sample_size.unwrap_or(20);
    if !(1..=100).contains(&sample_size) {
        anyhow::bail!("sample_size must be between 1 and 100");
    }
    if let Some(field) = &params.stratify_by {
        debug!(
            "Stratified sampling by '{}' not supported by the Gateway; returning head sample",
            field
        );
    }

    let per_page = sample_size.min(100);
    let response = gateway
        .fetch_rows(&params.dataset_name, &[], None, 1, per_page)
        .await?;

    let no_rows = Vec::new();
    let data = response
        .get("data")
        .and_then(Value::as_array)
        .unwrap_or(&no_rows);
    let text = if data.is_empty() {
        "No data in dataset or access denied.".to_string()
    } else {
        format!(
            "Sample ({} rows):\n{}",
            data.len(),
            serde_json::to_string_pretty(data)?
        )
    };

    Ok(ToolResult::with_structured(text, response))
}

// Include tests
#[cfg(test)]
#[path = "sample_test.rs"]
mod sample_test;
