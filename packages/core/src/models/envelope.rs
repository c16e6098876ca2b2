//! Tool Result Envelope
//!
//! The uniform shape every tool handler returns, success or failure.
//! Failures are signaled with `isError: true` plus human-readable text,
//! never as protocol-level faults; `structuredContent` is only ever the
//! untouched payload of a successful outcome.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One content block in a tool result.
///
/// The MCP spec allows several content types; this server only produces
/// text blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolContent {
    /// Content type discriminator (always "text")
    #[serde(rename = "type")]
    pub kind: String,

    /// Human-readable content
    pub text: String,
}

impl ToolContent {
    /// Create a text content block
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            text: text.into(),
        }
    }
}

/// Uniform result envelope for tool invocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    /// Content blocks shown to the caller
    pub content: Vec<ToolContent>,

    /// Machine-readable payload (successful outcomes only)
    #[serde(
        rename = "structuredContent",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub structured_content: Option<Value>,

    /// Set to true when the invocation failed
    #[serde(rename = "isError", default, skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

impl ToolResult {
    /// Successful result with text only
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::text(text)],
            structured_content: None,
            is_error: None,
        }
    }

    /// Successful result carrying the untouched upstream payload
    pub fn with_structured(text: impl Into<String>, payload: Value) -> Self {
        Self {
            content: vec![ToolContent::text(text)],
            structured_content: Some(payload),
            is_error: None,
        }
    }

    /// Failed result; `text` is the user-facing explanation
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::text(text)],
            structured_content: None,
            is_error: Some(true),
        }
    }

    /// Whether this envelope signals a failure
    pub fn failed(&self) -> bool {
        self.is_error.unwrap_or(false)
    }

    /// Text of the first content block (empty when absent)
    pub fn first_text(&self) -> &str {
        self.content.first().map(|c| c.text.as_str()).unwrap_or("")
    }
}

// Include tests
#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;
