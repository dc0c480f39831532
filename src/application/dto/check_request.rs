use crate::support_matrix::domain::{ExceptionTable, ReleaseLine};
use crate::support_matrix::services::DEFAULT_EOL_SOON_DAYS;
use chrono::NaiveDate;

/// CheckRequest - Internal request DTO for the anomaly check use case
#[derive(Debug, Clone)]
pub struct CheckRequest {
    pub release_line: ReleaseLine,
    pub today: NaiveDate,
    pub eol_soon_days: i64,
    /// Documented anomalies that must not be reported
    pub exceptions: ExceptionTable,
}

impl CheckRequest {
    pub fn new(release_line: ReleaseLine, today: NaiveDate) -> Self {
        Self {
            release_line,
            today,
            eol_soon_days: DEFAULT_EOL_SOON_DAYS,
            exceptions: ExceptionTable::new(),
        }
    }

    pub fn with_eol_soon_days(mut self, eol_soon_days: i64) -> Self {
        self.eol_soon_days = eol_soon_days;
        self
    }

    pub fn with_exceptions(mut self, exceptions: ExceptionTable) -> Self {
        self.exceptions = exceptions;
        self
    }
}
