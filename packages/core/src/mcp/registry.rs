//! Tool Registry
//!
//! Immutable mapping from tool name to asynchronous handler. Built once at
//! startup against a shared Gateway client and then only read, so
//! concurrent lookups need no synchronization.

use super::handlers::{aggregate, datasets, query, sample, schema};
use crate::gateway::GatewayClient;
use crate::models::ToolResult;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Boxed asynchronous tool handler
///
/// Receives the raw `arguments` object and always resolves to a result
/// envelope; failures are signaled inside the envelope, never as an Err.
pub type ToolHandler =
    Arc<dyn Fn(Value) -> Pin<Box<dyn Future<Output = ToolResult> + Send>> + Send + Sync>;

/// Registry of the five dataset tools.
pub struct ToolRegistry {
    tools: HashMap<&'static str, ToolHandler>,
}

impl ToolRegistry {
    /// Register every dataset tool against a shared Gateway client.
    pub fn new(gateway: Arc<GatewayClient>) -> Self {
        let mut tools: HashMap<&'static str, ToolHandler> = HashMap::new();

        let client = gateway.clone();
        tools.insert(
            "get_schema",
            Arc::new(move |args| {
                let client = client.clone();
                Box::pin(async move { schema::handle_get_schema(&client, args).await })
            }),
        );

        let client = gateway.clone();
        tools.insert(
            "query_dataset",
            Arc::new(move |args| {
                let client = client.clone();
                Box::pin(async move { query::handle_query_dataset(&client, args).await })
            }),
        );

        let client = gateway.clone();
        tools.insert(
            "aggregate_dataset",
            Arc::new(move |args| {
                let client = client.clone();
                Box::pin(async move { aggregate::handle_aggregate_dataset(&client, args).await })
            }),
        );

        let client = gateway.clone();
        tools.insert(
            "list_datasets",
            Arc::new(move |args| {
                let client = client.clone();
                Box::pin(async move { datasets::handle_list_datasets(&client, args).await })
            }),
        );

        let client = gateway;
        tools.insert(
            "sample_dataset",
            Arc::new(move |args| {
                let client = client.clone();
                Box::pin(async move { sample::handle_sample_dataset(&client, args).await })
            }),
        );

        Self { tools }
    }

    /// Look up a handler by tool name.
    pub fn get(&self, name: &str) -> Option<&ToolHandler> {
        self.tools.get(name)
    }

    /// Registered tool names, sorted for stable display.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.tools.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

// Include tests
#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;
