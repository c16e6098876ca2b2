//! Tests for markdown table and summary formatting.

use super::*;
use crate::models::FilterOp;
use serde_json::json;

fn filter(field: &str, op: FilterOp, value: serde_json::Value) -> Filter {
    Filter {
        field: field.to_string(),
        op,
        value,
    }
}

#[test]
fn test_empty_rows_render_no_data_indicator() {
    assert_eq!(format_markdown_table(&[]), "No data");
}

#[test]
fn test_table_columns_from_first_row() {
    let rows = vec![
        json!({ "name": "alpha", "amount": 120 }),
        json!({ "name": "beta", "amount": 80 }),
    ];
    let table = format_markdown_table(&rows);

    assert_eq!(
        table,
        "| name | amount |\n\
         | --- | --- |\n\
         | alpha | 120 |\n\
         | beta | 80 |"
    );
}

#[test]
fn test_table_later_rows_follow_first_row_shape() {
    // The second row has a different key set; missing keys render empty,
    // extra keys are not added as columns.
    let rows = vec![
        json!({ "name": "alpha", "amount": 120 }),
        json!({ "name": "beta", "extra": true }),
    ];
    let table = format_markdown_table(&rows);

    assert_eq!(
        table,
        "| name | amount |\n\
         | --- | --- |\n\
         | alpha | 120 |\n\
         | beta |  |"
    );
}

#[test]
fn test_table_cell_rendering() {
    let rows = vec![json!({
        "text": "a|b",
        "nested": { "k": 1 },
        "list": [1, 2],
        "missing": null,
        "flag": true
    })];
    let table = format_markdown_table(&rows);
    let data_row = table.lines().nth(2).unwrap();

    assert_eq!(data_row, "| a\\|b | {\"k\":1} | [1,2] |  | true |");
}

#[test]
fn test_query_summary_without_filters() {
    let summary = format_query_summary("orders", 1234567, 100, &[], 0, true);

    assert_eq!(
        summary,
        "# Query Results: orders\n\
         \n\
         **Total Matching Rows**: 1,234,567\n\
         **Rows Returned**: 100\n\
         **Offset**: 0\n\
         **Has More**: Yes"
    );
}

#[test]
fn test_query_summary_enumerates_filters() {
    let filters = vec![
        filter("status", FilterOp::Eq, json!("active")),
        filter("amount", FilterOp::Gt, json!(1000)),
        filter("tags", FilterOp::In, json!(["a", "b"])),
    ];
    let summary = format_query_summary("orders", 50, 10, &filters, 20, false);

    assert!(summary.contains("**Has More**: No"));
    assert!(summary.contains("**Applied Filters**:"));
    assert!(summary.contains("- `status` eq `active`"));
    assert!(summary.contains("- `amount` gt `1000`"));
    assert!(summary.contains("- `tags` in `[\"a\",\"b\"]`"));
}

#[test]
fn test_aggregation_results_empty() {
    let text = format_aggregation_results("orders", &[], None);
    assert_eq!(text, "# Aggregation Results: orders\n\nNo results found.");
}

#[test]
fn test_aggregation_results_headers_from_first_result() {
    let results = vec![json!({ "count": 10, "sum": 250 })];
    let text = format_aggregation_results("orders", &results, None);

    assert_eq!(
        text,
        "# Aggregation Results: orders\n\
         \n\
         | Count | Sum |\n\
         | --- | --- |\n\
         | 10 | 250 |"
    );
}

#[test]
fn test_aggregation_results_avg_rounds_to_two_decimals() {
    let results = vec![json!({ "avg": 12.3456, "min": 1.25, "max": 99.999 })];
    let text = format_aggregation_results("orders", &results, None);
    let data_row = text.lines().last().unwrap();

    assert_eq!(data_row, "| 12.35 | 1.25 | 99.999 |");
}

#[test]
fn test_aggregation_results_grouped() {
    let results = vec![
        json!({ "group_value": "active", "count": 7 }),
        json!({ "group_value": "inactive", "count": 3 }),
    ];
    let text = format_aggregation_results("users", &results, Some("status"));

    assert_eq!(
        text,
        "# Aggregation Results: users\n\
         \n\
         **Grouped by**: `status`\n\
         \n\
         | status | Count |\n\
         | --- | --- |\n\
         | active | 7 |\n\
         | inactive | 3 |"
    );
}
