//! Gateway Error Types

use thiserror::Error;

/// Gateway request failures.
///
/// A missing credential is a configuration error and is detected before any
/// network I/O. Non-success responses keep the status code and body text so
/// Gateway-side denials (e.g. ACL rejections) surface to the caller
/// verbatim; this client never interprets status codes beyond "failure".
#[derive(Error, Debug)]
pub enum GatewayError {
    /// No bearer credential configured
    #[error("DATASCOPE_API_TOKEN not configured. Please set the environment variable.")]
    MissingCredential,

    /// Gateway answered with a non-success status
    #[error("Gateway request failed ({status}): {body}")]
    RequestFailed { status: u16, body: String },

    /// Network-level failure before a response was received
    #[error("Gateway request error: {0}")]
    Transport(#[from] reqwest::Error),
}
