use crate::application::read_models::SupportReportModel;
use crate::support_matrix::domain::ReleaseLine;

/// ReportResponse - Internal response DTO for the support report use case
#[derive(Debug, Clone)]
pub struct ReportResponse {
    pub model: SupportReportModel,
    /// Release lines whose support matrix could not be fetched
    pub unavailable_release_lines: Vec<ReleaseLine>,
}

impl ReportResponse {
    pub fn new(model: SupportReportModel, unavailable_release_lines: Vec<ReleaseLine>) -> Self {
        Self {
            model,
            unavailable_release_lines,
        }
    }
}
