//! Tests for filter/sort/aggregation parsing and validation.

use super::*;
use serde_json::json;

#[test]
fn test_parse_valid_filter() {
    let raw = json!({ "field": "status", "type": "eq", "value": "active" });
    let filter = Filter::parse(&raw).unwrap();

    assert_eq!(filter.field, "status");
    assert_eq!(filter.op, FilterOp::Eq);
    assert_eq!(filter.value, json!("active"));
}

#[test]
fn test_parse_all_operators() {
    for (name, op) in [
        ("eq", FilterOp::Eq),
        ("ne", FilterOp::Ne),
        ("gt", FilterOp::Gt),
        ("lt", FilterOp::Lt),
        ("gte", FilterOp::Gte),
        ("lte", FilterOp::Lte),
        ("in", FilterOp::In),
        ("nin", FilterOp::Nin),
        ("regex", FilterOp::Regex),
    ] {
        let raw = json!({ "field": "f", "type": name, "value": 1 });
        let filter = Filter::parse(&raw).unwrap();
        assert_eq!(filter.op, op);
        assert_eq!(filter.op.as_str(), name);
    }
}

#[test]
fn test_parse_rejects_unknown_operator() {
    let raw = json!({ "field": "status", "type": "like", "value": "a%" });
    let err = Filter::parse(&raw).unwrap_err();

    assert_eq!(err.code(), "INVALID_FILTER");
    assert!(err.to_string().contains("like"));
}

#[test]
fn test_parse_rejects_extra_fields() {
    let raw = json!({ "field": "status", "type": "eq", "value": "x", "mode": "strict" });
    let err = Filter::parse(&raw).unwrap_err();

    assert_eq!(err.code(), "INVALID_FILTER");
}

#[test]
fn test_parse_rejects_missing_value() {
    let raw = json!({ "field": "status", "type": "eq" });
    assert!(Filter::parse(&raw).is_err());
}

#[test]
fn test_parse_list_fails_on_first_invalid() {
    let raw = vec![
        json!({ "field": "a", "type": "eq", "value": 1 }),
        json!({ "field": "b", "type": "nope", "value": 2 }),
    ];
    assert!(Filter::parse_list(&raw).is_err());

    let raw = vec![
        json!({ "field": "a", "type": "eq", "value": 1 }),
        json!({ "field": "b", "type": "gt", "value": 2 }),
    ];
    assert_eq!(Filter::parse_list(&raw).unwrap().len(), 2);
}

#[test]
fn test_filter_serializes_with_wire_names() {
    let filter = Filter {
        field: "amount".to_string(),
        op: FilterOp::Gte,
        value: json!(100),
    };
    let value = serde_json::to_value(&filter).unwrap();

    assert_eq!(value, json!({ "field": "amount", "type": "gte", "value": 100 }));
}

#[test]
fn test_sort_round_trip() {
    let sort: Sort = serde_json::from_value(json!({ "field": "name", "direction": "desc" })).unwrap();
    assert_eq!(sort.direction, SortDirection::Desc);
    assert_eq!(
        serde_json::to_value(&sort).unwrap(),
        json!({ "field": "name", "direction": "desc" })
    );

    let bad = serde_json::from_value::<Sort>(json!({ "field": "name", "direction": "down" }));
    assert!(bad.is_err());
}

#[test]
fn test_aggregation_field_requirement() {
    let count: Aggregation = serde_json::from_value(json!({ "operation": "count" })).unwrap();
    assert!(count.has_required_field());

    let sum: Aggregation =
        serde_json::from_value(json!({ "operation": "sum", "field": "amount" })).unwrap();
    assert!(sum.has_required_field());

    let sum_missing: Aggregation = serde_json::from_value(json!({ "operation": "sum" })).unwrap();
    assert!(!sum_missing.has_required_field());

    let sum_empty: Aggregation =
        serde_json::from_value(json!({ "operation": "avg", "field": "" })).unwrap();
    assert!(!sum_empty.has_required_field());
}
