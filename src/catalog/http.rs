//! reqwest-backed catalog client

use super::{CatalogClient, Locator};
use crate::config::EngineConfig;
use crate::errors::{CatalogError, CatalogResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Live catalog over HTTP. Cloning shares the connection pool.
#[derive(Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    /// Create a client with an explicit base url and per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> CatalogResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::transport(&base_url, format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &EngineConfig) -> CatalogResult<Self> {
        Self::new(
            config.base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }
}

#[async_trait]
impl CatalogClient for HttpCatalog {
    async fn fetch(&self, locator: &Locator) -> CatalogResult<Value> {
        let url = locator.url(&self.base_url);
        debug!(url = %url, "GET");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::transport(&url, e))?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(url));
        }

        let resp = resp
            .error_for_status()
            .map_err(|e| CatalogError::transport(&url, e))?;

        resp.json::<Value>()
            .await
            .map_err(|e| CatalogError::decode(&url, e))
    }

    fn name(&self) -> &str {
        "http"
    }
}
