use crate::shared::Result;
use crate::support_matrix::domain::{ReleaseLine, ReleaseOverview, SupportMatrix};
use async_trait::async_trait;

/// SupportMatrixRepository port for fetching a release line's OS support matrix
///
/// This port abstracts where the release notes live (web or a local
/// checkout of the release notes repository).
///
/// # Async Support
/// Release lines are fetched concurrently, so implementations must be
/// `Send + Sync`.
#[async_trait]
pub trait SupportMatrixRepository: Send + Sync {
    /// Fetches the supported OS matrix of one release line
    ///
    /// # Arguments
    /// * `release_line` - Major release line, e.g. `8`
    ///
    /// # Returns
    /// The families and distributions the release line supports
    ///
    /// # Errors
    /// Returns an error if:
    /// - The document cannot be fetched or read
    /// - The document is not valid support matrix JSON
    async fn fetch_support_matrix(&self, release_line: ReleaseLine) -> Result<SupportMatrix>;
}

/// ReleaseOverviewRepository port for release-line level metadata
#[async_trait]
pub trait ReleaseOverviewRepository: Send + Sync {
    /// Fetches the overview (support phase, EOL date) of one release line
    ///
    /// # Errors
    /// Returns an error if the document cannot be fetched or parsed
    async fn fetch_release_overview(&self, release_line: ReleaseLine) -> Result<ReleaseOverview>;
}
