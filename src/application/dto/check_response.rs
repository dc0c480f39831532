use crate::support_matrix::domain::{CheckOutcome, ReleaseLine, ReleaseReport};

/// CheckResponse - Internal response DTO for the anomaly check use case
#[derive(Debug, Clone)]
pub struct CheckResponse {
    pub release_line: ReleaseLine,
    pub report: ReleaseReport,
    pub outcome: CheckOutcome,
}

impl CheckResponse {
    pub fn new(release_line: ReleaseLine, report: ReleaseReport, outcome: CheckOutcome) -> Self {
        Self {
            release_line,
            report,
            outcome,
        }
    }

    /// Whether unsuppressed anomalies were found
    pub fn has_anomalies(&self) -> bool {
        !self.outcome.anomalies().is_empty()
    }
}
