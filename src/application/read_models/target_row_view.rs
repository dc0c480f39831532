//! View structs for one row of a target table

use crate::support_matrix::domain::{ReleaseLine, VersionWithEol};

/// One release-line column of a target row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnView {
    NotSupported,
    Supported {
        /// Display versions (prefix stripped, Windows simplified)
        versions: Vec<String>,
        architectures: Vec<String>,
    },
}

/// View representation of one report row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRowView {
    /// Row label, e.g. `Windows 11` or `Ubuntu`
    pub name: String,
    /// Distribution page
    pub link: Option<String>,
    /// One entry per current release line, ascending
    pub columns: Vec<(ReleaseLine, ColumnView)>,
    /// Distribution lifecycle policy page
    pub lifecycle_link: Option<String>,
    /// Past EOL milestones plus the next upcoming one, ascending by date
    pub narrative: Vec<VersionWithEol>,
}
