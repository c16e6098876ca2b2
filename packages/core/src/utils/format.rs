//! Result Formatting
//!
//! Renders row sets and aggregation results into markdown tables and
//! narrative summaries for tool responses.

use crate::models::Filter;
use serde_json::Value;

/// Format a row set as a markdown table.
///
/// The column set is taken from the first row's keys; every later row is
/// rendered against that fixed order, with missing keys as empty cells.
/// An empty row set yields the literal no-data indicator.
pub fn format_markdown_table(rows: &[Value]) -> String {
    let columns: Vec<&str> = match rows.first().and_then(Value::as_object) {
        Some(first) => first.keys().map(String::as_str).collect(),
        None => return "No data".to_string(),
    };

    let header = format!("| {} |", columns.join(" | "));
    let separator = format!("| {} |", vec!["---"; columns.len()].join(" | "));

    let mut lines = vec![header, separator];
    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|col| format_cell_value(row.get(col).unwrap_or(&Value::Null)))
            .collect();
        lines.push(format!("| {} |", cells.join(" | ")));
    }

    lines.join("\n")
}

/// Format a single cell value for a markdown table.
fn format_cell_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Object(_) | Value::Array(_) => value.to_string(),
        Value::String(s) => {
            // Escape pipes so cell text cannot corrupt the table structure
            if s.contains('|') {
                s.replace('|', "\\|")
            } else {
                s.clone()
            }
        }
        other => other.to_string(),
    }
}

/// Format a query summary with statistics and the applied filters.
pub fn format_query_summary(
    dataset_name: &str,
    total_matching: u64,
    rows_returned: usize,
    filters: &[Filter],
    offset: u64,
    has_more: bool,
) -> String {
    let mut lines = vec![
        format!("# Query Results: {}", dataset_name),
        String::new(),
        format!("**Total Matching Rows**: {}", thousands(total_matching)),
        format!("**Rows Returned**: {}", thousands(rows_returned as u64)),
        format!("**Offset**: {}", thousands(offset)),
        format!("**Has More**: {}", if has_more { "Yes" } else { "No" }),
    ];

    if !filters.is_empty() {
        lines.push(String::new());
        lines.push("**Applied Filters**:".to_string());
        for filter in filters {
            let value_str = match &filter.value {
                Value::Object(_) | Value::Array(_) => filter.value.to_string(),
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            lines.push(format!(
                "- `{}` {} `{}`",
                filter.field,
                filter.op.as_str(),
                value_str
            ));
        }
    }

    lines.join("\n")
}

/// Format aggregation results as markdown.
///
/// The header set is derived from the keys present in the first result;
/// averages are rendered to two decimal places, all other aggregates
/// unrounded.
pub fn format_aggregation_results(
    dataset_name: &str,
    results: &[Value],
    group_by: Option<&str>,
) -> String {
    let mut lines = vec![format!("# Aggregation Results: {}", dataset_name), String::new()];

    if let Some(group) = group_by {
        lines.push(format!("**Grouped by**: `{}`", group));
        lines.push(String::new());
    }

    let first = match results.first() {
        Some(first) => first,
        None => {
            lines.push("No results found.".to_string());
            return lines.join("\n");
        }
    };

    let mut headers: Vec<&str> = Vec::new();
    if let Some(group) = group_by {
        if first.get("group_value").is_some() {
            headers.push(group);
        }
    }
    for &(key, label) in AGGREGATE_COLUMNS {
        if first.get(key).is_some() {
            headers.push(label);
        }
    }

    lines.push(format!("| {} |", headers.join(" | ")));
    lines.push(format!("| {} |", vec!["---"; headers.len()].join(" | ")));

    for result in results {
        let mut row: Vec<String> = Vec::new();
        if group_by.is_some() && result.get("group_value").is_some() {
            row.push(format_cell_value(&result["group_value"]));
        }
        for &(key, _) in AGGREGATE_COLUMNS {
            let Some(value) = result.get(key) else { continue };
            if key == "avg" {
                row.push(match value.as_f64() {
                    Some(n) => format!("{:.2}", n),
                    None => format_cell_value(value),
                });
            } else {
                row.push(format_cell_value(value));
            }
        }
        lines.push(format!("| {} |", row.join(" | ")));
    }

    lines.join("\n")
}

const AGGREGATE_COLUMNS: &[(&str, &str)] = &[
    ("count", "Count"),
    ("sum", "Sum"),
    ("avg", "Average"),
    ("min", "Min"),
    ("max", "Max"),
];

/// Render an integer with thousands separators ("1234567" -> "1,234,567").
fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// Include tests
#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;
