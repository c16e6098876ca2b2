//! Structured Filter, Sort, and Aggregation Types
//!
//! The dataset-agnostic query language accepted by the query tools. These
//! types are validated at the tool boundary; handlers never see a filter
//! that failed structural validation.

use crate::error::DatasetError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Comparison, membership, and pattern operators supported by filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOp {
    Eq,
    Ne,
    Gt,
    Lt,
    Gte,
    Lte,
    In,
    Nin,
    Regex,
}

impl FilterOp {
    /// Wire/display name of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Gt => "gt",
            Self::Lt => "lt",
            Self::Gte => "gte",
            Self::Lte => "lte",
            Self::In => "in",
            Self::Nin => "nin",
            Self::Regex => "regex",
        }
    }
}

/// One condition on one field.
///
/// Several filters may target the same field; they are conjoined (logical
/// AND) by the selector translation, never overwritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Filter {
    /// Field the condition applies to
    pub field: String,

    /// Filter operator
    #[serde(rename = "type")]
    pub op: FilterOp,

    /// Comparison value; an array for `in`/`nin`, pattern text for `regex`
    pub value: Value,
}

impl Filter {
    /// Parse one raw filter object, surfacing structural problems as a
    /// classified [`DatasetError::InvalidFilter`].
    pub fn parse(raw: &Value) -> Result<Self, DatasetError> {
        serde_json::from_value(raw.clone()).map_err(|e| DatasetError::invalid_filter(e.to_string()))
    }

    /// Parse a raw filter list. Fails on the first invalid entry.
    pub fn parse_list(raw: &[Value]) -> Result<Vec<Self>, DatasetError> {
        raw.iter().map(Self::parse).collect()
    }
}

/// Sort direction for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Single-field sort. At most one sort is active per query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

/// Aggregation operations accepted by `aggregate_dataset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateOp {
    Count,
    Sum,
    Avg,
    Min,
    Max,
}

/// One requested aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Aggregation {
    pub operation: AggregateOp,

    /// Target field; required for every operation except `count`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl Aggregation {
    /// Whether the `field` requirement is satisfied for this operation.
    pub fn has_required_field(&self) -> bool {
        matches!(self.operation, AggregateOp::Count)
            || self.field.as_deref().is_some_and(|f| !f.is_empty())
    }
}

// Include tests
#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;
