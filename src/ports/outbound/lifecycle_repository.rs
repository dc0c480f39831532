use crate::shared::Result;
use crate::support_matrix::domain::SupportCycle;
use async_trait::async_trait;

/// LifecycleRepository port for fetching OS end-of-life data
///
/// This port abstracts the lifecycle provider (e.g., endoflife.date).
/// Products are keyed by the distribution id used in the release notes.
///
/// # Async Support
/// Lookups for the versions of a report row run concurrently.
/// Implementations must be `Send + Sync` to support concurrent access.
#[async_trait]
pub trait LifecycleRepository: Send + Sync {
    /// Fetches the lifecycle record of one product cycle
    ///
    /// # Arguments
    /// * `product` - Product name, e.g. `ubuntu`
    /// * `cycle` - Cycle name, e.g. `22.04`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails
    /// - The provider has no record for the cycle
    /// - The response cannot be parsed
    async fn fetch_product_cycle(&self, product: &str, cycle: &str) -> Result<SupportCycle>;

    /// Fetches every known cycle of a product, newest first as published
    ///
    /// # Errors
    /// Returns an error if the product is unknown or the request fails
    async fn fetch_product_cycles(&self, product: &str) -> Result<Vec<SupportCycle>>;
}
