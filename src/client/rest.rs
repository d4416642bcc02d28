//! REST client for the accounting server.
//!
//! # Responsibilities
//! - Issue requests against the configured base endpoint
//! - Decode JSON responses into wire types
//! - Classify failures (transport / status / decode)
//!
//! # Design Decisions
//! - One request per step, no retries; a probe run is a snapshot
//! - Non-success responses keep the raw body for diagnostics

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::types::{ClientError, ClientResult, RecipeCatalog, TransactionRecord};
use crate::config::{HttpConfig, ServerConfig};

/// Typed client for the accounting server's REST surface.
pub struct AccountingClient {
    client: reqwest::Client,
    base_url: String,
    health_path: String,
}

impl AccountingClient {
    /// Build a client with the configured timeouts.
    pub fn new(server: &ServerConfig, http: &HttpConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(http.connect_timeout_secs))
            .timeout(Duration::from_secs(http.request_timeout_secs))
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            client,
            base_url: server.base_url.trim_end_matches('/').to_string(),
            health_path: server.health_path.clone(),
        })
    }

    /// Fetch the full recipe catalog.
    pub async fn recipes(&self) -> ClientResult<RecipeCatalog> {
        self.get_json("/recipes").await
    }

    /// Invoke a named recipe with a JSON object of parameters.
    ///
    /// The result shape is recipe-specific, so it stays a raw value.
    pub async fn invoke_recipe(&self, name: &str, params: &Value) -> ClientResult<Value> {
        let url = format!("{}/recipe/{}", self.base_url, name);
        let response = self
            .client
            .post(url)
            .json(params)
            .send()
            .await
            .map_err(ClientError::Connect)?;

        Self::decode(response).await
    }

    /// Fetch the full ordered transaction history.
    pub async fn transactions(&self) -> ClientResult<Vec<TransactionRecord>> {
        self.get_json("/transactions").await
    }

    /// Fetch the server's health document.
    pub async fn health(&self) -> ClientResult<Value> {
        self.get_json(&self.health_path).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ClientError::Connect)?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        response.json().await.map_err(ClientError::Decode)
    }
}
