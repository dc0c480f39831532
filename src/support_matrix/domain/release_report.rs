use super::ReleaseLine;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;

/// Support phase of a release line as published in its release overview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportPhase {
    Preview,
    GoLive,
    Active,
    Maintenance,
    Eol,
    Unknown,
}

impl SupportPhase {
    /// Lenient parse; unrecognised phases are `Unknown`
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "preview" => SupportPhase::Preview,
            "go-live" | "golive" | "rc" => SupportPhase::GoLive,
            "active" => SupportPhase::Active,
            "maintenance" => SupportPhase::Maintenance,
            "eol" => SupportPhase::Eol,
            _ => SupportPhase::Unknown,
        }
    }
}

/// Release-line level metadata from `releases.json`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseOverview {
    pub channel_version: String,
    pub support_phase: SupportPhase,
    pub eol_date: Option<NaiveDate>,
    pub release_type: Option<String>,
}

impl ReleaseOverview {
    pub fn new(channel_version: impl Into<String>, support_phase: SupportPhase) -> Self {
        Self {
            channel_version: channel_version.into(),
            support_phase,
            eol_date: None,
            release_type: None,
        }
    }

    pub fn is_eol(&self) -> bool {
        self.support_phase == SupportPhase::Eol
    }
}

/// Derived lifecycle status of one distribution within one release line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistributionStatus {
    pub id: String,
    pub name: String,
    /// Supported versions whose EOL falls within the warning window
    pub eol_soon: Vec<String>,
    /// Supported versions that are already past EOL
    pub eol_but_supported: Vec<String>,
    /// Active upstream versions the support matrix does not mention
    pub missing: Vec<String>,
    /// Version → justification note
    pub exceptions: BTreeMap<String, String>,
}

impl DistributionStatus {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyStatus {
    pub name: String,
    pub distributions: Vec<DistributionStatus>,
}

/// Derived status of every distribution in one release line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseReport {
    pub release_line: ReleaseLine,
    pub families: Vec<FamilyStatus>,
}

/// Category of an undocumented discrepancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AnomalyCategory {
    EolSoon,
    EolButSupported,
    Missing,
}

impl fmt::Display for AnomalyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnomalyCategory::EolSoon => write!(f, "EOL Soon"),
            AnomalyCategory::EolButSupported => write!(f, "EOL but still supported"),
            AnomalyCategory::Missing => write!(f, "Currently missing"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anomaly {
    pub distribution_id: String,
    pub distribution_name: String,
    pub version: String,
    pub category: AnomalyCategory,
}

/// Result of checking one release line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The release line itself is EOL; live checks were skipped
    ReleaseLineEol,
    Checked(Vec<Anomaly>),
}

impl CheckOutcome {
    pub fn anomalies(&self) -> &[Anomaly] {
        match self {
            CheckOutcome::ReleaseLineEol => &[],
            CheckOutcome::Checked(anomalies) => anomalies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_support_phase_parse() {
        assert_eq!(SupportPhase::parse("active"), SupportPhase::Active);
        assert_eq!(SupportPhase::parse("EOL"), SupportPhase::Eol);
        assert_eq!(SupportPhase::parse("go-live"), SupportPhase::GoLive);
        assert_eq!(SupportPhase::parse("maintenance"), SupportPhase::Maintenance);
        assert_eq!(SupportPhase::parse("sunset"), SupportPhase::Unknown);
    }

    #[test]
    fn test_overview_is_eol() {
        assert!(ReleaseOverview::new("5.0", SupportPhase::Eol).is_eol());
        assert!(!ReleaseOverview::new("8.0", SupportPhase::Active).is_eol());
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(AnomalyCategory::EolSoon.to_string(), "EOL Soon");
        assert_eq!(
            AnomalyCategory::EolButSupported.to_string(),
            "EOL but still supported"
        );
        assert_eq!(AnomalyCategory::Missing.to_string(), "Currently missing");
    }

    #[test]
    fn test_eol_outcome_has_no_anomalies() {
        assert!(CheckOutcome::ReleaseLineEol.anomalies().is_empty());
    }
}
