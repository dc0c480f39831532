use crate::application::read_models::SupportReportModel;
use crate::shared::Result;

/// ReportFormatter port for rendering the support report document
pub trait ReportFormatter {
    /// Renders `model` into `template`, replacing its placeholder lines
    ///
    /// # Arguments
    /// * `model` - Rows and sections computed for this run
    /// * `template` - Template text; non-placeholder lines are kept verbatim
    ///
    /// # Returns
    /// The complete document, link anchors included
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn format(&self, model: &SupportReportModel, template: &str) -> Result<String>;
}
