//! query_dataset Tool Handler
//!
//! Filtered, sorted, paginated row retrieval through the Gateway's paged
//! view endpoint.

use super::parse_params;
use crate::error::format_error;
use crate::gateway::GatewayClient;
use crate::models::{Filter, Sort, ToolResult};
use crate::utils::{format_markdown_table, format_query_summary};
use anyhow::Result;
use serde::Deserialize;
use serde_json::Value;

/// Parameters for query_dataset
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct QueryDatasetParams {
    dataset_name: String,

    #[serde(default)]
    filters: Vec<Value>,

    #[serde(default)]
    sort: Option<Sort>,

    #[serde(default)]
    max_rows: Option<u64>,

    #[serde(default)]
    offset: Option<u64>,

    #[serde(default)]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ResponseFormat {
    Markdown,
    Json,
}

/// Handle query_dataset: one Gateway page fetch shaped into a summary plus
/// row table (or pretty JSON), with the untouched response as structured
/// content.
pub async fn handle_query_dataset(gateway: &GatewayClient, params: Value) -> ToolResult {
    match query_dataset(gateway, params).await {
        Ok(result) => result,
        Err(err) => ToolResult::error(format!("Error querying dataset: {}", format_error(&err))),
    }
}

async fn query_dataset(gateway: &GatewayClient, params: Value) -> Result<ToolResult> {
    let params: QueryDatasetParams = parse_params(params)?;
    if params.dataset_name.trim().is_empty() {
        anyhow::bail!("Dataset name is required");
    }

    let max_rows = params.max_rows.unwrap_or(100);
    if !(1..=1000).contains(&max_rows) {
        anyhow::bail!("max_rows must be between 1 and 1000");
    }
    let offset = params.offset.unwrap_or(0);
    let format = params.response_format.unwrap_or(ResponseFormat::Markdown);
    let filters = Filter::parse_list(&params.filters)?;

    // Offset-based pagination maps onto the Gateway's page model
    let page = offset / max_rows + 1;
    let response = gateway
        .fetch_rows(
            &params.dataset_name,
            &filters,
            params.sort.as_ref(),
            page,
            max_rows,
        )
        .await?;

    let total = response.get("total").and_then(Value::as_u64).unwrap_or(0);
    let no_rows = Vec::new();
    let data = response
        .get("data")
        .and_then(Value::as_array)
        .unwrap_or(&no_rows);
    let rows_returned = data.len();
    let has_more = offset + (rows_returned as u64) < total;

    let summary = format_query_summary(
        &params.dataset_name,
        total,
        rows_returned,
        &filters,
        offset,
        has_more,
    );
    let text = match format {
        ResponseFormat::Markdown => format!("{}\n\n{}", summary, format_markdown_table(data)),
        ResponseFormat::Json => {
            format!("{}\n\n{}", summary, serde_json::to_string_pretty(data)?)
        }
    };

    Ok(ToolResult::with_structured(text, response))
}

// Include tests
#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;
