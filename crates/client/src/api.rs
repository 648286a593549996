//! REST API client for the console's cluster and route endpoints.
//!
//! Wraps the console HTTP API (data-center listing, designated-route
//! retrieval and replacement, active-route queries) using [`reqwest`].

use std::time::Duration;

use serde::Deserialize;

use meridian_core::models::{DataCenter, Route};

use crate::config::ConsoleConfig;

/// Message the console returns when a designated-route replacement is
/// accepted.
pub const UPDATE_SUCCESS: &str = "success";

/// HTTP client for a single console backend.
pub struct ConsoleClient {
    client: reqwest::Client,
    base_url: String,
}

/// Response body of the designated-route replacement endpoint.
///
/// The console signals logical rejection in-band: HTTP 200 with a
/// `message` other than [`UPDATE_SUCCESS`].
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOutcome {
    /// Console verdict, `"success"` or a human-readable rejection.
    pub message: String,
}

impl UpdateOutcome {
    pub fn is_success(&self) -> bool {
        self.message == UPDATE_SUCCESS
    }
}

/// Errors from the console REST layer.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The console returned a non-2xx status code.
    #[error("console API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl ConsoleClient {
    /// Create a new client for the configured console.
    pub fn new(config: &ConsoleConfig) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Create a client reusing an existing [`reqwest::Client`] (useful
    /// for connection pooling across components).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// List the data centers a cluster is deployed in.
    ///
    /// Sends a `GET /api/clusters/{cluster}/dcs` request.
    pub async fn data_centers(&self, cluster_name: &str) -> Result<Vec<DataCenter>, ServiceError> {
        let response = self
            .client
            .get(Self::dcs_url(&self.base_url, cluster_name))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch the designated-route set stored for a (cluster, dc) pair.
    ///
    /// Sends a `GET /api/clusters/{cluster}/dcs/{dc}/designated-routes`
    /// request.
    pub async fn designated_routes(
        &self,
        dc_name: &str,
        cluster_name: &str,
    ) -> Result<Vec<Route>, ServiceError> {
        let response = self
            .client
            .get(Self::designated_routes_url(
                &self.base_url,
                cluster_name,
                dc_name,
            ))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Replace the whole designated-route set for a (cluster, dc) pair.
    ///
    /// Sends a `POST /api/clusters/{cluster}/dcs/{dc}/designated-routes`
    /// request carrying the full replacement set. The console applies it
    /// atomically and reports acceptance in the response body.
    pub async fn replace_designated_routes(
        &self,
        cluster_name: &str,
        dc_name: &str,
        routes: &[Route],
    ) -> Result<UpdateOutcome, ServiceError> {
        tracing::debug!(
            cluster = %cluster_name,
            dc = %dc_name,
            routes = routes.len(),
            "Replacing designated routes"
        );

        let response = self
            .client
            .post(Self::designated_routes_url(
                &self.base_url,
                cluster_name,
                dc_name,
            ))
            .json(&routes)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// List the active routes originating in a data center.
    ///
    /// Sends a `GET /api/routes/active?srcDcName={dc}` request.
    pub async fn active_routes_from(&self, src_dc_name: &str) -> Result<Vec<Route>, ServiceError> {
        let response = self
            .client
            .get(Self::active_routes_url(&self.base_url))
            .query(&[("srcDcName", src_dc_name)])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- path builders ----

    fn dcs_url(base_url: &str, cluster_name: &str) -> String {
        format!("{}/api/clusters/{}/dcs", base_url, cluster_name)
    }

    fn designated_routes_url(base_url: &str, cluster_name: &str, dc_name: &str) -> String {
        format!(
            "{}/api/clusters/{}/dcs/{}/designated-routes",
            base_url, cluster_name, dc_name
        )
    }

    fn active_routes_url(base_url: &str) -> String {
        format!("{}/api/routes/active", base_url)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`ServiceError::Api`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ServiceError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ServiceError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ServiceError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
