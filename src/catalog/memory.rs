//! In-memory catalog for testing and offline demos

use super::{CatalogClient, Locator};
use crate::config::DEFAULT_BASE_URL;
use crate::errors::{CatalogError, CatalogResult};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::debug;

/// Resources keyed by their path relative to the base url (`"pokemon/1"`,
/// `"ability/65"`). Populate it first, then share it; lookups never mutate
/// the resource table.
#[derive(Debug)]
pub struct MemoryCatalog {
    base_url: String,
    resources: HashMap<String, Value>,
    failing: HashSet<String>,
    delays: HashMap<String, Duration>,
    requests: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            resources: HashMap::new(),
            failing: HashSet::new(),
            delays: HashMap::new(),
            requests: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
        }
    }

    /// Absolute url for a relative path, as the live catalog would hand it out.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}/", self.base_url, path.trim_matches('/'))
    }

    pub fn insert(&mut self, path: &str, resource: Value) {
        self.resources
            .insert(path.trim_matches('/').to_string(), resource);
    }

    /// Make every fetch of `path` fail with a transport error.
    pub fn fail(&mut self, path: &str) {
        self.failing.insert(path.trim_matches('/').to_string());
    }

    /// Delay every fetch of `path`, to shuffle completion order under concurrency.
    pub fn delay(&mut self, path: &str, delay: Duration) {
        self.delays.insert(path.trim_matches('/').to_string(), delay);
    }

    /// Number of fetches served so far, failures included.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Most fetches that were ever in progress at the same time.
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    fn lookup(&self, path: String) -> CatalogResult<Value> {
        if self.failing.contains(&path) {
            return Err(CatalogError::transport(path, "injected failure"));
        }

        self.resources
            .get(&path)
            .cloned()
            .ok_or(CatalogError::NotFound(path))
    }
}

#[async_trait]
impl CatalogClient for MemoryCatalog {
    async fn fetch(&self, locator: &Locator) -> CatalogResult<Value> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let path = locator.relative_path(&self.base_url);
        debug!(path = %path, "memory fetch");

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(&path) {
            tokio::time::sleep(*delay).await;
        }
        let result = self.lookup(path);

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }

    fn name(&self) -> &str {
        "memory"
    }
}
