//! Filter-to-Selector Translation
//!
//! Translates a structured filter list into the document-store match
//! expression. Pure transform: no side effects, no failures. Invalid
//! filters are rejected upstream by schema validation before reaching this
//! module.

use crate::models::{Filter, FilterOp};
use serde_json::{json, Map, Value};
use std::collections::HashSet;

/// Translate a filter list into a selector expression.
///
/// An empty list yields the match-everything selector `{}`. A field with a
/// single filter is stored directly for compactness; the second filter on an
/// already-used field promotes that field's conditions into a `$and` group,
/// and any further conditions on promoted fields are appended to the group.
pub fn to_selector(filters: &[Filter]) -> Value {
    let mut selector = Map::new();
    let mut conjunction: Vec<Value> = Vec::new();
    let mut promoted: HashSet<String> = HashSet::new();

    for filter in filters {
        let cond = condition(filter.op, &filter.value);

        if promoted.contains(&filter.field) {
            conjunction.push(field_clause(&filter.field, cond));
        } else if let Some(existing) = selector.remove(&filter.field) {
            conjunction.push(field_clause(&filter.field, existing));
            conjunction.push(field_clause(&filter.field, cond));
            promoted.insert(filter.field.clone());
        } else {
            selector.insert(filter.field.clone(), cond);
        }
    }

    if !conjunction.is_empty() {
        selector.insert("$and".to_string(), Value::Array(conjunction));
    }

    Value::Object(selector)
}

/// Build the condition for one operator. `eq` maps to the bare value, all
/// other operators wrap it in the matching selector operator.
fn condition(op: FilterOp, value: &Value) -> Value {
    match op {
        FilterOp::Eq => value.clone(),
        FilterOp::Ne => json!({ "$ne": value }),
        FilterOp::Gt => json!({ "$gt": value }),
        FilterOp::Lt => json!({ "$lt": value }),
        FilterOp::Gte => json!({ "$gte": value }),
        FilterOp::Lte => json!({ "$lte": value }),
        FilterOp::In => json!({ "$in": coerce_sequence(value) }),
        FilterOp::Nin => json!({ "$nin": coerce_sequence(value) }),
        FilterOp::Regex => json!({ "$regex": value, "$options": "i" }),
    }
}

/// Membership values accept a scalar as shorthand for a one-element list.
fn coerce_sequence(value: &Value) -> Value {
    match value {
        Value::Array(_) => value.clone(),
        other => json!([other]),
    }
}

fn field_clause(field: &str, cond: Value) -> Value {
    let mut clause = Map::new();
    clause.insert(field.to_string(), cond);
    Value::Object(clause)
}

// Include tests
#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;
