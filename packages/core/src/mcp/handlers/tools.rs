//! Tool Catalogue
//!
//! Static definitions for the five dataset tools, served by tools/list.
//! Schemas are maintained by hand for precise control over descriptions and
//! the published API surface.

use serde_json::{json, Value};

/// JSON definitions (name, description, input schema) for every tool.
pub fn definitions() -> Value {
    json!([
        {
            "name": "get_schema",
            "description": "Get schema information for a dataset: column names, types, \
                editability, and key fields. Use this first when working with an \
                unfamiliar dataset.\n\n\
                Args:\n\
                  - dataset_name (string, required): Name of the dataset\n\n\
                Returns the Gateway's column definitions for the dataset.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "dataset_name": {
                        "type": "string",
                        "description": "Name of the dataset to get schema for"
                    }
                },
                "required": ["dataset_name"]
            }
        },
        {
            "name": "query_dataset",
            "description": "Query a dataset with structured filters and return matching rows \
                with a summary. Supports sorting and offset-based pagination.\n\n\
                Args:\n\
                  - dataset_name (string, required)\n\
                  - filters (array, optional): objects with field, type \
                (eq|ne|gt|lt|gte|lte|in|nin|regex), and value; multiple filters on one \
                field are ANDed\n\
                  - sort (object, optional): field + direction (asc|desc)\n\
                  - max_rows (number, optional, default 100, max 1000)\n\
                  - offset (number, optional, default 0)\n\
                  - response_format (string, optional, default markdown): markdown or json\n\n\
                Examples:\n\
                  - Rows over $1000: filters=[{\"field\": \"amount\", \"type\": \"gt\", \"value\": 1000}]\n\
                  - Next page: offset=100, max_rows=50",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "dataset_name": { "type": "string" },
                    "filters": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "field": { "type": "string" },
                                "type": {
                                    "type": "string",
                                    "enum": ["eq", "ne", "gt", "lt", "gte", "lte", "in", "nin", "regex"]
                                },
                                "value": {}
                            },
                            "required": ["field", "type", "value"]
                        }
                    },
                    "sort": {
                        "type": "object",
                        "properties": {
                            "field": { "type": "string" },
                            "direction": { "type": "string", "enum": ["asc", "desc"] }
                        },
                        "required": ["field", "direction"]
                    },
                    "max_rows": { "type": "number", "minimum": 1, "maximum": 1000 },
                    "offset": { "type": "number", "minimum": 0 },
                    "response_format": { "type": "string", "enum": ["markdown", "json"] }
                },
                "required": ["dataset_name"]
            }
        },
        {
            "name": "aggregate_dataset",
            "description": "Aggregate a dataset without fetching all rows.\n\n\
                Args:\n\
                  - dataset_name (string, required)\n\
                  - filters (array, optional): same format as query_dataset\n\
                  - aggregations (array, required): objects with operation \
                (count|sum|avg|min|max) and field (required except for count)\n\
                  - group_by (string, optional)\n\n\
                Currently only a bare count (no group_by) is supported via the Gateway; \
                other operations return an explanatory error instead of a wrong \
                client-side computation.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "dataset_name": { "type": "string" },
                    "filters": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "field": { "type": "string" },
                                "type": {
                                    "type": "string",
                                    "enum": ["eq", "ne", "gt", "lt", "gte", "lte", "in", "nin", "regex"]
                                },
                                "value": {}
                            },
                            "required": ["field", "type", "value"]
                        }
                    },
                    "aggregations": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "operation": {
                                    "type": "string",
                                    "enum": ["count", "sum", "avg", "min", "max"]
                                },
                                "field": { "type": "string" }
                            },
                            "required": ["operation"]
                        },
                        "minItems": 1
                    },
                    "group_by": { "type": "string" }
                },
                "required": ["dataset_name", "aggregations"]
            }
        },
        {
            "name": "list_datasets",
            "description": "List the datasets visible to the configured credential. Use this \
                to discover what is available before querying.",
            "inputSchema": {
                "type": "object",
                "properties": {}
            }
        },
        {
            "name": "sample_dataset",
            "description": "Get a sample of rows from a dataset for quick exploration.\n\n\
                Args:\n\
                  - dataset_name (string, required)\n\
                  - sample_size (number, optional, default 20, max 100)\n\
                  - stratify_by (string, optional): field to stratify by (not yet \
                supported by the Gateway; the first rows are returned)",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "dataset_name": { "type": "string" },
                    "sample_size": { "type": "number", "minimum": 1, "maximum": 100 },
                    "stratify_by": { "type": "string" }
                },
                "required": ["dataset_name"]
            }
        }
    ])
}

/// Handle tools/list MCP request
///
/// The catalogue is static and returned unconditionally.
pub fn handle_tools_list(_params: Value) -> Value {
    json!({ "tools": definitions() })
}

// Include tests
#[cfg(test)]
#[path = "tools_test.rs"]
mod tools_test;
