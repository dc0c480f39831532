use async_trait::async_trait;
use chrono::NaiveDate;
use os_support::prelude::*;
use std::collections::HashMap;

/// Mock LifecycleRepository keyed by product and cycle
#[derive(Default)]
pub struct MockLifecycleRepository {
    cycles: HashMap<String, Vec<SupportCycle>>,
}

impl MockLifecycleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cycle(mut self, product: &str, cycle: &str, eol: EolDate) -> Self {
        let record = SupportCycle::new(eol)
            .with_cycle(cycle)
            .with_link(format!("https://example.com/{}/{}", product, cycle));
        self.cycles.entry(product.to_string()).or_default().push(record);
        self
    }

    pub fn with_released_cycle(
        mut self,
        product: &str,
        cycle: &str,
        release_date: NaiveDate,
        eol: EolDate,
    ) -> Self {
        let record = SupportCycle::new(eol)
            .with_cycle(cycle)
            .with_release_date(release_date);
        self.cycles.entry(product.to_string()).or_default().push(record);
        self
    }
}

#[async_trait]
impl LifecycleRepository for MockLifecycleRepository {
    async fn fetch_product_cycle(&self, product: &str, cycle: &str) -> Result<SupportCycle> {
        self.cycles
            .get(product)
            .and_then(|cycles| {
                cycles
                    .iter()
                    .find(|c| c.cycle.as_deref() == Some(cycle))
                    .cloned()
            })
            .ok_or_else(|| anyhow::anyhow!("HTTP request failed with status: 404 Not Found"))
    }

    async fn fetch_product_cycles(&self, product: &str) -> Result<Vec<SupportCycle>> {
        self.cycles
            .get(product)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("HTTP request failed with status: 404 Not Found"))
    }
}
