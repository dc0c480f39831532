use super::report_section::ReportSection;
use super::target_row_view::TargetRowView;
use crate::support_matrix::domain::{EolDate, ReleaseLine, SupportTier};
use std::collections::HashMap;

/// Column header of one current release line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseColumnView {
    pub release_line: ReleaseLine,
    /// e.g. `.NET 8.0`
    pub title: String,
    pub link: String,
}

/// View representation of an OS version no release line supports anymore
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedRowView {
    pub name: String,
    pub version: String,
    pub eol: EolDate,
    pub link: Option<String>,
}

/// Everything the report formatter needs for one run
#[derive(Debug, Clone, Default)]
pub struct SupportReportModel {
    pub columns: Vec<ReleaseColumnView>,
    pub targets: HashMap<SupportTier, Vec<TargetRowView>>,
    pub unsupported: Vec<UnsupportedRowView>,
}

impl SupportReportModel {
    pub fn new(columns: Vec<ReleaseColumnView>) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    pub fn rows(&self, tier: SupportTier) -> &[TargetRowView] {
        self.targets.get(&tier).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `section` has nothing to render apart from its header
    pub fn is_empty(&self, section: ReportSection) -> bool {
        match section {
            ReportSection::Targets(tier) => self.rows(tier).is_empty(),
            ReportSection::Unsupported => self.unsupported.is_empty(),
        }
    }
}
