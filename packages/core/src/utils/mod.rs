//! Shared Utilities
//!
//! Column type inference and human-readable result formatting. Pure
//! functions with no I/O; everything here operates on values already
//! fetched from the Gateway.

pub mod format;
pub mod infer;

pub use format::{format_aggregation_results, format_markdown_table, format_query_summary};
pub use infer::{extract_sample_values, infer_column_type, infer_type, TypeTag};
