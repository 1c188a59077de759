//! Catalog access.
//!
//! ## Table of Contents
//! - **CatalogClient**: Object-safe trait, one keyed fetch per call
//! - **Locator**: What to fetch (a keyed resource or a fully-qualified url)
//! - **fetch_resource**: Fetch and decode into a `schema` type
//! - **HttpCatalog**: reqwest-backed client for the live catalog
//! - **MemoryCatalog**: In-memory catalog for tests and demos
//! - **LimitedCatalog**: Shared ceiling on in-flight requests

pub mod http;
pub mod limit;
pub mod memory;

use crate::errors::{CatalogError, CatalogResult};
use crate::identifier::Identifier;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

pub use http::HttpCatalog;
pub use limit::LimitedCatalog;
pub use memory::MemoryCatalog;

/// A reference to one catalog resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Locator {
    /// `pokemon/{identifier}`
    Pokemon(Identifier),
    /// `pokemon-species/{identifier}`
    Species(Identifier),
    /// `pokemon/{identifier}/encounters`
    Encounters(Identifier),
    /// A resource url handed out by another resource
    Url(String),
}

impl Locator {
    /// Path of the resource relative to `base_url`, without leading or trailing slashes.
    /// Urls on a different host are returned whole (minus the trailing slash).
    pub fn relative_path(&self, base_url: &str) -> String {
        match self {
            Locator::Pokemon(id) => format!("pokemon/{}", id),
            Locator::Species(id) => format!("pokemon-species/{}", id),
            Locator::Encounters(id) => format!("pokemon/{}/encounters", id),
            Locator::Url(url) => {
                let base = base_url.trim_end_matches('/');
                match url.strip_prefix(base) {
                    Some(rest) => rest.trim_matches('/').to_string(),
                    None => url.trim_end_matches('/').to_string(),
                }
            }
        }
    }

    /// Absolute url of the resource.
    pub fn url(&self, base_url: &str) -> String {
        match self {
            Locator::Url(url) if url.starts_with("http://") || url.starts_with("https://") => {
                url.clone()
            }
            _ => format!(
                "{}/{}",
                base_url.trim_end_matches('/'),
                self.relative_path(base_url)
            ),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Url(url) => write!(f, "{}", url),
            other => write!(f, "{}", other.relative_path("")),
        }
    }
}

/// A single-attempt resource fetcher. No retries, no caching, no state kept
/// between calls; callers decide whether a failure excludes or degrades.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch the raw JSON body of one resource
    async fn fetch(&self, locator: &Locator) -> CatalogResult<Value>;

    /// Client name for logging
    fn name(&self) -> &str;
}

/// Fetch a resource and decode it into its schema type.
pub async fn fetch_resource<T: DeserializeOwned>(
    client: &dyn CatalogClient,
    locator: &Locator,
) -> CatalogResult<T> {
    let value = client.fetch(locator).await?;
    serde_json::from_value(value).map_err(|e| CatalogError::decode(locator.to_string(), e))
}
