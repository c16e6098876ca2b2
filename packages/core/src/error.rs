//! Dataset Error Taxonomy
//!
//! A closed set of dataset access failures, each carrying a stable
//! machine-readable code and an HTTP-equivalent status class. Gateway
//! transport failures are deliberately not part of this taxonomy; they
//! surface through the generic formatting path in [`format_error`].

use std::any::Any;
use thiserror::Error;

/// Dataset operation errors
///
/// This enum is the stable error contract of the crate. Every kind maps to
/// a fixed code and status class that clients may rely on.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Referenced dataset does not exist
    #[error("Dataset '{0}' not found")]
    DatasetNotFound(String),

    /// Filter failed structural validation
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// Referenced field absent from the dataset schema
    #[error("Field '{field}' does not exist in dataset '{dataset}'")]
    FieldNotFound { field: String, dataset: String },

    /// Storage service unreachable
    #[error("Unable to connect to database: {0}")]
    DatabaseConnection(String),
}

impl DatasetError {
    /// Create a dataset not found error
    pub fn dataset_not_found(name: impl Into<String>) -> Self {
        Self::DatasetNotFound(name.into())
    }

    /// Create an invalid filter error
    pub fn invalid_filter(msg: impl Into<String>) -> Self {
        Self::InvalidFilter(msg.into())
    }

    /// Create a field not found error
    pub fn field_not_found(field: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self::FieldNotFound {
            field: field.into(),
            dataset: dataset.into(),
        }
    }

    /// Create a database connection error
    pub fn database_connection(msg: impl Into<String>) -> Self {
        Self::DatabaseConnection(msg.into())
    }

    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::DatasetNotFound(_) => "DATASET_NOT_FOUND",
            Self::InvalidFilter(_) => "INVALID_FILTER",
            Self::FieldNotFound { .. } => "FIELD_NOT_FOUND",
            Self::DatabaseConnection(_) => "DATABASE_CONNECTION_ERROR",
        }
    }

    /// HTTP-equivalent status class
    pub fn status(&self) -> u16 {
        match self {
            Self::DatasetNotFound(_) => 404,
            Self::InvalidFilter(_) => 400,
            Self::FieldNotFound { .. } => 400,
            Self::DatabaseConnection(_) => 503,
        }
    }

    /// Kind name used in user-facing error text
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DatasetNotFound(_) => "DatasetNotFoundError",
            Self::InvalidFilter(_) => "InvalidFilterError",
            Self::FieldNotFound { .. } => "FieldNotFoundError",
            Self::DatabaseConnection(_) => "DatabaseConnectionError",
        }
    }
}

/// Render a caught failure as user-facing text.
///
/// This is the single point every tool handler uses to convert a failure
/// into the text of its result envelope. Classified dataset errors render as
/// `<KindName>: <message>`, anything else as `Error: <message>`. No handler
/// exposes a raw error chain or backtrace to the client.
pub fn format_error(err: &anyhow::Error) -> String {
    if let Some(dataset_err) = err.downcast_ref::<DatasetError>() {
        format!("{}: {}", dataset_err.kind(), dataset_err)
    } else {
        format!("Error: {}", err)
    }
}

/// Render a panic payload caught at the router boundary.
///
/// Panic payloads are `&str` or `String` in practice; anything else gets a
/// fixed placeholder rather than a debug dump.
pub fn format_panic(payload: &(dyn Any + Send)) -> String {
    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unexpected panic".to_string()
    };
    format!("Unknown error: {}", message)
}

// Include tests
#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
