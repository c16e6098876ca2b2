//! aggregate_dataset Tool Handler
//!
//! The Gateway has no aggregate endpoint yet. A bare count is derived from
//! the paged view's total field; every other operation returns an explicit
//! unsupported response instead of a client-side computation that could be
//! wrong.

use super::parse_params;
use crate::error::format_error;
use crate::gateway::GatewayClient;
use crate::models::{AggregateOp, Aggregation, Filter, ToolResult};
use anyhow::Result;
use serde::Deserialize;
use serde_json::{json, Value};

/// Parameters for aggregate_dataset
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AggregateDatasetParams {
    dataset_name: String,

    #[serde(default)]
    filters: Vec<Value>,

    aggregations: Vec<Aggregation>,

    #[serde(default)]
    group_by: Option<String>,
}

/// Handle aggregate_dataset.
pub async fn handle_aggregate_dataset(gateway: &GatewayClient, params: Value) -> ToolResult {
    match aggregate_dataset(gateway, params).await {
        Ok(result) => result,
        Err(err) => {
            ToolResult::error(format!("Error aggregating dataset: {}", format_error(&err)))
        }
    }
}

async fn aggregate_dataset(gateway: &GatewayClient, params: Value) -> Result<ToolResult> {
    let params: AggregateDatasetParams = parse_params(params)?;
    if params.dataset_name.trim().is_empty() {
        anyhow::bail!("Dataset name is required");
    }
    if params.aggregations.is_empty() {
        anyhow::bail!("At least one aggregation is required");
    }
    for aggregation in &params.aggregations {
        if !aggregation.has_required_field() {
            anyhow::bail!("Field is required for sum, avg, min, and max operations");
        }
    }
    let filters = Filter::parse_list(&params.filters)?;

    let bare_count = params.group_by.is_none()
        && params.aggregations.len() == 1
        && params.aggregations[0].operation == AggregateOp::Count;
    if bare_count {
        // A minimal page is enough; only the total matters
        let response = gateway
            .fetch_rows(&params.dataset_name, &filters, None, 1, 1)
            .await?;
        let count = match response.get("total").and_then(Value::as_u64) {
            Some(total) => total,
            None => response
                .get("data")
                .and_then(Value::as_array)
                .map_or(0, |rows| rows.len() as u64),
        };

        return Ok(ToolResult::with_structured(
            format!("Count: {}", count),
            json!({ "count": count }),
        ));
    }

    Ok(ToolResult::error(
        "Only count aggregation is supported via Gateway at this time. \
         sum/avg/min/max and group_by require a future Gateway endpoint.",
    ))
}

// Include tests
#[cfg(test)]
#[path = "aggregate_test.rs"]
mod aggregate_test;
