//! Column Type Inference
//!
//! Infers semantic column types from sample values and extracts
//! representative distinct values for schema discovery.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Semantic type of a column value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Unknown,
    Array,
    Date,
    Object,
    Number,
    Boolean,
    String,
}

impl TypeTag {
    /// Lowercase name as exposed in schema output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Array => "array",
            Self::Date => "date",
            Self::Object => "object",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::String => "string",
        }
    }
}

/// Infer the semantic type of a single value.
///
/// Structural checks run before scalar checks. Strings are promoted to
/// `date` only when they lead with a `YYYY-MM-DD` pattern that is a real
/// calendar date; a bare numeric string like "20240115" stays a string.
pub fn infer_type(value: &Value) -> TypeTag {
    match value {
        Value::Null => TypeTag::Unknown,
        Value::Array(_) => TypeTag::Array,
        Value::Object(_) => TypeTag::Object,
        Value::Number(_) => TypeTag::Number,
        Value::Bool(_) => TypeTag::Boolean,
        Value::String(s) => {
            if is_date_like(s) {
                TypeTag::Date
            } else {
                TypeTag::String
            }
        }
    }
}

fn is_date_like(s: &str) -> bool {
    static DATE_PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = DATE_PATTERN
        .get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").expect("date pattern is valid"));

    match pattern.find(s) {
        Some(m) => NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d").is_ok(),
        None => false,
    }
}

/// Infer a column's type from multiple sample values.
///
/// Returns the most common per-value tag. Ties break to the tag that first
/// reached the highest count in sample order, which keeps the result stable
/// across runs.
pub fn infer_column_type(values: &[Value]) -> TypeTag {
    if values.is_empty() {
        return TypeTag::Unknown;
    }

    let mut counts: Vec<(TypeTag, usize)> = Vec::new();
    for value in values {
        let tag = infer_type(value);
        match counts.iter_mut().find(|(t, _)| *t == tag) {
            Some((_, n)) => *n += 1,
            None => counts.push((tag, 1)),
        }
    }

    let mut best = counts[0];
    for &(tag, count) in &counts[1..] {
        if count > best.1 {
            best = (tag, count);
        }
    }
    best.0
}

/// Extract up to `limit` distinct values of `field` from `rows`.
///
/// Preserves row order and deduplicates by serialized representation, so
/// structurally equal values collapse even when they are distinct
/// instances. Null and absent values are skipped.
pub fn extract_sample_values(rows: &[Value], field: &str, limit: usize) -> Vec<Value> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut values = Vec::new();

    for row in rows {
        let value = match row.get(field) {
            Some(v) if !v.is_null() => v,
            _ => continue,
        };
        if seen.insert(value.to_string()) {
            values.push(value.clone());
            if values.len() >= limit {
                break;
            }
        }
    }

    values
}

// Include tests
#[cfg(test)]
#[path = "infer_test.rs"]
mod infer_test;
