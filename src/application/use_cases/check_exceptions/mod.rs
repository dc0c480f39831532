use super::{missing_lifecycle_message, LIFECYCLE_FETCH_CONCURRENCY};
use crate::application::dto::{CheckRequest, CheckResponse};
use crate::ports::outbound::{
    LifecycleRepository, ProgressReporter, ReleaseOverviewRepository, SupportMatrixRepository,
};
use crate::shared::Result;
use crate::support_matrix::domain::{SupportCycle, SupportMatrix};
use crate::support_matrix::services::{AnomalyChecker, ReleaseStatusService, StatusWindow};
use futures::stream::{self, StreamExt};
use std::collections::{BTreeSet, HashMap};

/// CheckExceptionsUseCase - Checks one release line's support matrix against
/// live lifecycle data and the documented exceptions
///
/// # Type Parameters
/// * `REPO` - Release notes repository (support matrix and overview)
/// * `LREPO` - LifecycleRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct CheckExceptionsUseCase<REPO, LREPO, PR> {
    release_notes_repository: REPO,
    lifecycle_repository: LREPO,
    progress_reporter: PR,
}

impl<REPO, LREPO, PR> CheckExceptionsUseCase<REPO, LREPO, PR>
where
    REPO: SupportMatrixRepository + ReleaseOverviewRepository,
    LREPO: LifecycleRepository,
    PR: ProgressReporter,
{
    pub fn new(release_notes_repository: REPO, lifecycle_repository: LREPO, progress_reporter: PR) -> Self {
        Self {
            release_notes_repository,
            lifecycle_repository,
            progress_reporter,
        }
    }

    /// Executes the anomaly check for `request.release_line`
    ///
    /// # Errors
    /// Returns an error if the release line's overview or support matrix
    /// cannot be fetched. Missing lifecycle data is reported and skipped.
    pub async fn execute(&self, request: CheckRequest) -> Result<CheckResponse> {
        let release_line = request.release_line;
        self.progress_reporter
            .report(&format!("📖 Loading release notes for {}", release_line));

        // Step 1: Primary data; failures are fatal
        let (overview, matrix) = futures::join!(
            self.release_notes_repository
                .fetch_release_overview(release_line),
            self.release_notes_repository
                .fetch_support_matrix(release_line)
        );
        let overview = overview?;
        let matrix = matrix?;

        // Step 2: Upstream cycles, skipped for an EOL release line
        let is_eol = overview.is_eol();
        let cycles = if is_eol {
            self.progress_reporter.report(&format!(
                "ℹ️  {} is end-of-life; skipping lifecycle checks",
                release_line
            ));
            HashMap::new()
        } else {
            self.fetch_all_cycles(&matrix).await
        };

        // Step 3: Derive statuses and apply exceptions
        let window = StatusWindow::new(request.today, request.eol_soon_days);
        let report = ReleaseStatusService::build_report(
            release_line,
            &matrix,
            &cycles,
            &request.exceptions,
            window,
        );
        let outcome = AnomalyChecker::check(&report, is_eol);

        self.progress_reporter.report_completion(&format!(
            "✅ Check complete: {} anomaly(ies) found",
            outcome.anomalies().len()
        ));

        Ok(CheckResponse::new(release_line, report, outcome))
    }

    /// Fetches the full cycle list of every distribution in the matrix
    async fn fetch_all_cycles(&self, matrix: &SupportMatrix) -> HashMap<String, Vec<SupportCycle>> {
        let products: BTreeSet<String> = matrix
            .distributions()
            .map(|(_, distribution)| distribution.id.clone())
            .collect();
        let total = products.len();

        let mut results: Vec<(String, Result<Vec<SupportCycle>>)> = stream::iter(products)
            .map(|product| async move {
                let result = self.lifecycle_repository.fetch_product_cycles(&product).await;
                (product, result)
            })
            .buffer_unordered(LIFECYCLE_FETCH_CONCURRENCY)
            .collect()
            .await;
        results.sort_by(|a, b| a.0.cmp(&b.0));

        let mut cycles = HashMap::with_capacity(total);
        for (idx, (product, result)) in results.into_iter().enumerate() {
            self.progress_reporter
                .report_progress(idx + 1, total, Some(&product));
            match result {
                Ok(list) => {
                    cycles.insert(product, list);
                }
                Err(_) => self
                    .progress_reporter
                    .report_error(&missing_lifecycle_message(&product, None)),
            }
        }

        cycles
    }
}
