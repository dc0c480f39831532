use crate::ports::outbound::LifecycleRepository;
use crate::shared::Result;
use crate::support_matrix::domain::SupportCycle;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// Cache key for a single product cycle
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct CycleKey {
    product: String,
    cycle: String,
}

impl CycleKey {
    fn new(product: &str, cycle: &str) -> Self {
        Self {
            product: product.to_string(),
            cycle: cycle.to_string(),
        }
    }
}

/// CachingLifecycleRepository wraps a LifecycleRepository and adds in-memory caching.
///
/// Report rows and the unsupported section look up overlapping versions;
/// within one run each lookup reaches the inner repository once. Failures
/// are not cached.
pub struct CachingLifecycleRepository<R: LifecycleRepository> {
    inner: R,
    cycles: Arc<DashMap<CycleKey, SupportCycle>>,
    products: Arc<DashMap<String, Vec<SupportCycle>>>,
}

impl<R: LifecycleRepository> CachingLifecycleRepository<R> {
    /// Creates a new caching repository wrapping the given inner repository
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cycles: Arc::new(DashMap::new()),
            products: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cycles.len() + self.products.len()
    }
}

#[async_trait]
impl<R: LifecycleRepository> LifecycleRepository for CachingLifecycleRepository<R> {
    async fn fetch_product_cycle(&self, product: &str, cycle: &str) -> Result<SupportCycle> {
        let key = CycleKey::new(product, cycle);

        if let Some(cached) = self.cycles.get(&key) {
            return Ok(cached.clone());
        }

        let fetched = self.inner.fetch_product_cycle(product, cycle).await?;
        self.cycles.insert(key, fetched.clone());

        Ok(fetched)
    }

    async fn fetch_product_cycles(&self, product: &str) -> Result<Vec<SupportCycle>> {
        if let Some(cached) = self.products.get(product) {
            return Ok(cached.clone());
        }

        let fetched = self.inner.fetch_product_cycles(product).await?;
        self.products.insert(product.to_string(), fetched.clone());

        Ok(fetched)
    }
}
