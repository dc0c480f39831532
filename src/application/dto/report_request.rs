use crate::support_matrix::domain::ReleaseLine;
use chrono::NaiveDate;

/// Placeholder in `release_notes_link` replaced by the channel version
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// ReportRequest - Internal request DTO for the support report use case
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Every release line to fetch; the unsupported section scans all of them
    pub release_lines: Vec<ReleaseLine>,
    /// Release lines shown as table columns
    pub current_release_lines: Vec<ReleaseLine>,
    /// Platform name used in column headers, e.g. ".NET"
    pub platform_name: String,
    /// Column header link, `{version}` is replaced with e.g. `8.0`
    pub release_notes_link: String,
    pub today: NaiveDate,
}

impl ReportRequest {
    pub fn new(
        release_lines: Vec<ReleaseLine>,
        current_release_lines: Vec<ReleaseLine>,
        platform_name: impl Into<String>,
        release_notes_link: impl Into<String>,
        today: NaiveDate,
    ) -> Self {
        let mut release_lines = release_lines;
        release_lines.sort();
        release_lines.dedup();

        let mut current_release_lines = current_release_lines;
        current_release_lines.sort();
        current_release_lines.dedup();

        Self {
            release_lines,
            current_release_lines,
            platform_name: platform_name.into(),
            release_notes_link: release_notes_link.into(),
            today,
        }
    }

    pub fn release_notes_link_for(&self, release_line: ReleaseLine) -> String {
        self.release_notes_link
            .replace(VERSION_PLACEHOLDER, &release_line.channel_version())
    }
}
