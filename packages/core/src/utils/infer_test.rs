//! Tests for column type inference and sample value extraction.

use super::*;
use serde_json::json;

#[test]
fn test_infer_scalar_types() {
    assert_eq!(infer_type(&json!(null)), TypeTag::Unknown);
    assert_eq!(infer_type(&json!([1, 2])), TypeTag::Array);
    assert_eq!(infer_type(&json!({ "a": 1 })), TypeTag::Object);
    assert_eq!(infer_type(&json!(42)), TypeTag::Number);
    assert_eq!(infer_type(&json!(1.5)), TypeTag::Number);
    assert_eq!(infer_type(&json!(true)), TypeTag::Boolean);
    assert_eq!(infer_type(&json!("hello")), TypeTag::String);
}

#[test]
fn test_infer_date_strings() {
    assert_eq!(infer_type(&json!("2024-01-15")), TypeTag::Date);
    assert_eq!(infer_type(&json!("2024-01-15T10:30:00Z")), TypeTag::Date);
}

#[test]
fn test_numeric_string_is_not_a_date() {
    // Parses as a timestamp in some date libraries but fails the pattern
    assert_eq!(infer_type(&json!("20240115")), TypeTag::String);
}

#[test]
fn test_invalid_calendar_date_is_a_string() {
    assert_eq!(infer_type(&json!("2024-13-45")), TypeTag::String);
    assert_eq!(infer_type(&json!("2024-02-30")), TypeTag::String);
}

#[test]
fn test_date_pattern_must_lead() {
    assert_eq!(infer_type(&json!("received 2024-01-15")), TypeTag::String);
}

#[test]
fn test_column_type_mode() {
    let values = vec![json!(1), json!(2), json!("three"), json!(4)];
    assert_eq!(infer_column_type(&values), TypeTag::Number);
}

#[test]
fn test_column_type_empty_is_unknown() {
    assert_eq!(infer_column_type(&[]), TypeTag::Unknown);
}

#[test]
fn test_column_type_tie_breaks_to_first_encountered() {
    // Two strings, two numbers: string reached the top count first
    let values = vec![json!("a"), json!(1), json!("b"), json!(2)];
    assert_eq!(infer_column_type(&values), TypeTag::String);

    let values = vec![json!(1), json!("a"), json!(2), json!("b")];
    assert_eq!(infer_column_type(&values), TypeTag::Number);
}

#[test]
fn test_extract_sample_values_dedupes() {
    let rows = vec![
        json!({ "status": "active" }),
        json!({ "status": "inactive" }),
        json!({ "status": "active" }),
        json!({ "status": "pending" }),
    ];
    let values = extract_sample_values(&rows, "status", 5);

    assert_eq!(values, vec![json!("active"), json!("inactive"), json!("pending")]);
}

#[test]
fn test_extract_sample_values_respects_limit() {
    let rows: Vec<_> = (0..20).map(|i| json!({ "n": i })).collect();
    let values = extract_sample_values(&rows, "n", 5);

    assert_eq!(values.len(), 5);
    assert_eq!(values, vec![json!(0), json!(1), json!(2), json!(3), json!(4)]);
}

#[test]
fn test_extract_sample_values_skips_null_and_missing() {
    let rows = vec![
        json!({ "tag": null }),
        json!({ "other": 1 }),
        json!({ "tag": "x" }),
    ];
    let values = extract_sample_values(&rows, "tag", 5);

    assert_eq!(values, vec![json!("x")]);
}

#[test]
fn test_extract_sample_values_structural_equality() {
    // Distinct object instances with equal structure collapse to one entry
    let rows = vec![
        json!({ "meta": { "a": 1, "b": 2 } }),
        json!({ "meta": { "a": 1, "b": 2 } }),
        json!({ "meta": { "a": 1, "b": 3 } }),
    ];
    let values = extract_sample_values(&rows, "meta", 5);

    assert_eq!(values.len(), 2);
}
