use super::{missing_lifecycle_message, LIFECYCLE_FETCH_CONCURRENCY};
use crate::application::dto::{ReportRequest, ReportResponse};
use crate::application::read_models::{
    ColumnView, ReleaseColumnView, SupportReportModel, TargetRowView, UnsupportedRowView,
};
use crate::ports::outbound::{LifecycleRepository, ProgressReporter, SupportMatrixRepository};
use crate::shared::error::SupportError;
use crate::shared::Result;
use crate::support_matrix::domain::distribution::WINDOWS_NAME;
use crate::support_matrix::domain::{
    ReleaseCatalog, ReleaseLine, SupportCycle, SupportTier, TargetSelection,
};
use crate::support_matrix::policies::LifecycleNarrativePolicy;
use crate::support_matrix::services::version_display::prettify_windows_version;
use crate::support_matrix::services::{
    CrossVersionAggregator, CycleLookup, EolMerge, UnsupportedDetector, UnsupportedRecord,
    UnsupportedWithEol,
};
use futures::future::join_all;
use futures::stream::{self, StreamExt};

/// GenerateSupportReportUseCase - Builds the multi-release-line OS support report
///
/// # Type Parameters
/// * `MREPO` - SupportMatrixRepository implementation
/// * `LREPO` - LifecycleRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateSupportReportUseCase<MREPO, LREPO, PR> {
    matrix_repository: MREPO,
    lifecycle_repository: LREPO,
    progress_reporter: PR,
}

impl<MREPO, LREPO, PR> GenerateSupportReportUseCase<MREPO, LREPO, PR>
where
    MREPO: SupportMatrixRepository,
    LREPO: LifecycleRepository,
    PR: ProgressReporter,
{
    /// Creates a new GenerateSupportReportUseCase with injected dependencies
    pub fn new(matrix_repository: MREPO, lifecycle_repository: LREPO, progress_reporter: PR) -> Self {
        Self {
            matrix_repository,
            lifecycle_repository,
            progress_reporter,
        }
    }

    /// Executes the report generation use case
    ///
    /// # Arguments
    /// * `request` - Release lines to fetch and to display, and the report date
    ///
    /// # Returns
    /// The read model for the report formatter
    ///
    /// # Errors
    /// Returns an error only if no release line could be fetched at all.
    /// Individual release-line and lifecycle failures are reported and skipped.
    pub async fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        // Step 1: Fetch every release line's support matrix
        let catalog = self.fetch_catalog(&request.release_lines).await;
        let unavailable = catalog.unavailable_lines();
        if !request.release_lines.is_empty() && unavailable.len() == request.release_lines.len() {
            return Err(SupportError::Validation {
                message: format!(
                    "none of the release lines {} could be fetched",
                    join_release_lines(&request.release_lines)
                ),
            }
            .into());
        }

        // Step 2: Target tables over the current release lines
        let mut model = SupportReportModel::new(self.build_columns(&catalog, &request));
        for tier in SupportTier::ALL {
            let rows = self.build_tier(&catalog, &request, tier).await;
            model.targets.insert(tier, rows);
        }

        // Step 3: Versions no release line supports any more
        model.unsupported = self.build_unsupported(&catalog).await;

        self.progress_reporter.report_completion(&format!(
            "✅ Support report complete: {} unsupported version(s) listed",
            model.unsupported.len()
        ));

        Ok(ReportResponse::new(model, unavailable))
    }

    /// Fetches all release lines concurrently; failures leave an empty slot
    async fn fetch_catalog(&self, release_lines: &[ReleaseLine]) -> ReleaseCatalog {
        self.progress_reporter.report(&format!(
            "📖 Loading support matrices for {}",
            join_release_lines(release_lines)
        ));

        let fetches = release_lines.iter().map(|&release_line| async move {
            let result = self.matrix_repository.fetch_support_matrix(release_line).await;
            (release_line, result)
        });
        let results = join_all(fetches).await;

        let mut catalog = ReleaseCatalog::new();
        let mut loaded = 0;
        for (release_line, result) in results {
            match result {
                Ok(matrix) => {
                    loaded += 1;
                    catalog.insert(release_line, Some(matrix));
                }
                Err(e) => {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Failed to load support matrix for {}: {}",
                        release_line, e
                    ));
                    catalog.insert(release_line, None);
                }
            }
        }

        self.progress_reporter.report(&format!(
            "✅ Loaded {} of {} release line(s)",
            loaded,
            release_lines.len()
        ));

        catalog
    }

    fn build_columns(
        &self,
        catalog: &ReleaseCatalog,
        request: &ReportRequest,
    ) -> Vec<ReleaseColumnView> {
        catalog
            .subset(&request.current_release_lines)
            .into_iter()
            .map(|release_line| ReleaseColumnView {
                release_line,
                title: format!("{} {}", request.platform_name, release_line),
                link: request.release_notes_link_for(release_line),
            })
            .collect()
    }

    async fn build_tier(
        &self,
        catalog: &ReleaseCatalog,
        request: &ReportRequest,
        tier: SupportTier,
    ) -> Vec<TargetRowView> {
        let selections = tier.targets();
        let total = selections.len();
        let mut rows = Vec::with_capacity(total);

        for (idx, selection) in selections.iter().enumerate() {
            let row = self.build_target_row(catalog, request, selection).await;
            self.progress_reporter
                .report_progress(idx + 1, total, Some(&row.name));
            rows.push(row);
        }

        rows
    }

    async fn build_target_row(
        &self,
        catalog: &ReleaseCatalog,
        request: &ReportRequest,
        selection: &TargetSelection,
    ) -> TargetRowView {
        let row = CrossVersionAggregator::aggregate(catalog, &request.current_release_lines, selection);

        let cycles = match &row.representative {
            Some(distribution) => {
                self.fetch_cycles(&distribution.id, row.distinct_versions())
                    .await
            }
            None => CycleLookup::new(),
        };
        let versions = EolMerge::join(&row, &cycles);
        let narrative = LifecycleNarrativePolicy::select(&versions, request.today);

        let columns = row
            .release_lines
            .iter()
            .map(|&release_line| {
                let column = match row.column_versions(release_line) {
                    Some(versions) => ColumnView::Supported {
                        versions,
                        architectures: row.architectures().to_vec(),
                    },
                    None => ColumnView::NotSupported,
                };
                (release_line, column)
            })
            .collect();

        TargetRowView {
            name: row.display_name(),
            link: row.representative.as_ref().and_then(|d| d.link.clone()),
            columns,
            lifecycle_link: row.representative.as_ref().and_then(|d| d.lifecycle.clone()),
            narrative,
        }
    }

    /// Looks up one cycle per version, at most
    /// [`LIFECYCLE_FETCH_CONCURRENCY`] at a time
    async fn fetch_cycles(&self, product: &str, versions: Vec<String>) -> CycleLookup {
        let mut results: Vec<(String, Result<SupportCycle>)> = stream::iter(versions)
            .map(|version| async move {
                let result = self
                    .lifecycle_repository
                    .fetch_product_cycle(product, &version)
                    .await;
                (version, result)
            })
            .buffer_unordered(LIFECYCLE_FETCH_CONCURRENCY)
            .collect()
            .await;
        results.sort_by(|a, b| a.0.cmp(&b.0));

        let mut lookup = CycleLookup::new();
        for (version, result) in results {
            let cycle = match result {
                Ok(cycle) => Some(cycle),
                Err(_) => {
                    self.progress_reporter
                        .report_error(&missing_lifecycle_message(product, Some(&version)));
                    None
                }
            };
            lookup.insert(version, cycle);
        }

        lookup
    }

    /// Unsupported section: scans every distribution of every fetched
    /// release line, not only the current ones or the targeted ones
    async fn build_unsupported(&self, catalog: &ReleaseCatalog) -> Vec<UnsupportedRowView> {
        let records = UnsupportedDetector::detect(catalog.entries());

        self.progress_reporter.report(&format!(
            "🔍 Fetching end-of-life data for {} unsupported version(s)...",
            records.len()
        ));

        let mut results: Vec<(UnsupportedRecord, Result<SupportCycle>)> = stream::iter(records)
            .map(|record| async move {
                let result = self
                    .lifecycle_repository
                    .fetch_product_cycle(&record.distribution_id, &record.version)
                    .await;
                (record, result)
            })
            .buffer_unordered(LIFECYCLE_FETCH_CONCURRENCY)
            .collect()
            .await;
        results.sort_by(|a, b| {
            (&a.0.distribution_id, &a.0.version).cmp(&(&b.0.distribution_id, &b.0.version))
        });

        let mut joined = Vec::with_capacity(results.len());
        for (record, result) in results {
            if result.is_err() {
                self.progress_reporter.report_error(&missing_lifecycle_message(
                    &record.distribution_id,
                    Some(&record.version),
                ));
            }
            joined.push(UnsupportedWithEol {
                record,
                cycle: result.ok(),
            });
        }

        EolMerge::order_unsupported(joined)
            .into_iter()
            .map(|entry| {
                let eol = entry.eol();
                let version = if entry.record.distribution_name == WINDOWS_NAME {
                    prettify_windows_version(&entry.record.version)
                } else {
                    entry.record.version
                };
                UnsupportedRowView {
                    name: entry.record.distribution_name,
                    version,
                    eol,
                    link: entry.cycle.and_then(|c| c.link),
                }
            })
            .collect()
    }
}

fn join_release_lines(release_lines: &[ReleaseLine]) -> String {
    release_lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
