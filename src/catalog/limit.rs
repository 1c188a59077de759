//! Shared ceiling on in-flight catalog requests

use super::{CatalogClient, Locator};
use crate::errors::{CatalogError, CatalogResult};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Wraps a client so that at most `limit` fetches run at once, however deeply
/// the callers nest their fan-outs. A permit is held only for the duration of
/// one fetch, so nested callers cannot starve each other.
pub struct LimitedCatalog {
    inner: Arc<dyn CatalogClient>,
    permits: Semaphore,
}

impl LimitedCatalog {
    pub fn new(inner: Arc<dyn CatalogClient>, limit: usize) -> Self {
        Self {
            inner,
            permits: Semaphore::new(limit.max(1)),
        }
    }
}

#[async_trait]
impl CatalogClient for LimitedCatalog {
    async fn fetch(&self, locator: &Locator) -> CatalogResult<Value> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|e| CatalogError::transport(locator.to_string(), e))?;
        self.inner.fetch(locator).await
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::Identifier;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Records the highest number of fetches it ever saw at once.
    #[derive(Default)]
    struct PeakCatalog {
        current: AtomicUsize,
        peak: AtomicUsize,
    }

    #[async_trait]
    impl CatalogClient for PeakCatalog {
        async fn fetch(&self, _locator: &Locator) -> CatalogResult<Value> {
            let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(10)).await;
            self.current.fetch_sub(1, Ordering::SeqCst);
            Ok(Value::Null)
        }

        fn name(&self) -> &str {
            "peak"
        }
    }

    #[tokio::test]
    async fn test_concurrent_fetches_never_exceed_limit() {
        let inner = Arc::new(PeakCatalog::default());
        let limited = LimitedCatalog::new(inner.clone(), 3);

        let locators: Vec<Locator> = (1..=20)
            .map(|id| Locator::Pokemon(Identifier::Id(id)))
            .collect();
        futures::future::join_all(locators.iter().map(|l| limited.fetch(l))).await;

        assert_eq!(inner.peak.load(Ordering::SeqCst), 3);
        assert_eq!(limited.name(), "peak");
    }
}
