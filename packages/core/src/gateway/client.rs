//! Authenticated Gateway HTTP Client

use super::GatewayError;
use crate::models::{Filter, Sort};
use reqwest::{Client, Method};
use serde_json::{json, Value};
use tracing::debug;

/// HTTP client for the DataScope Gateway.
///
/// Attaches the configured bearer credential to every request. No retries
/// and no timeout beyond the transport defaults; failures surface
/// immediately to the caller, which owns user-facing messaging.
pub struct GatewayClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl GatewayClient {
    /// Create a client for the Gateway at `base_url`.
    ///
    /// An empty token is treated as absent, so a blank environment variable
    /// behaves the same as an unset one.
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    /// Issue an authenticated request to a Gateway endpoint.
    ///
    /// Fails fast with [`GatewayError::MissingCredential`] before any
    /// network call when no bearer credential is configured.
    pub async fn request(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&Value>,
    ) -> Result<Value, GatewayError> {
        let token = self.token.as_ref().ok_or(GatewayError::MissingCredential)?;
        let url = format!("{}{}", self.base_url, endpoint);

        debug!("Gateway request: {} {}", method, url);

        let mut request = self
            .client
            .request(method, &url)
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await?;
            return Err(GatewayError::RequestFailed { status, body });
        }

        Ok(response.json().await?)
    }

    /// Fetch one page of rows from a dataset's paged view.
    ///
    /// The body shape (`filters`/`sorters`/`page`/`per_page`) is a fixed
    /// wire contract owned by the Gateway; structured filters are forwarded
    /// verbatim.
    pub async fn fetch_rows(
        &self,
        dataset: &str,
        filters: &[Filter],
        sort: Option<&Sort>,
        page: u64,
        per_page: u64,
    ) -> Result<Value, GatewayError> {
        let sorters: Vec<&Sort> = sort.into_iter().collect();
        let body = json!({
            "filters": filters,
            "sorters": sorters,
            "page": page,
            "per_page": per_page,
        });

        self.request(
            &format!("/ds/viewViaPost/{}/default/mcp", urlencoding::encode(dataset)),
            Method::POST,
            Some(&body),
        )
        .await
    }

    /// Fetch the column definitions of a dataset.
    pub async fn fetch_columns(&self, dataset: &str) -> Result<Value, GatewayError> {
        self.request(
            &format!("/ds/view/columns/{}/default/mcp", urlencoding::encode(dataset)),
            Method::GET,
            None,
        )
        .await
    }

    /// List the datasets visible to the configured credential.
    pub async fn list_datasets(&self) -> Result<Value, GatewayError> {
        self.request("/ds/dsList/mcp", Method::GET, None).await
    }
}

// Include tests
#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;
