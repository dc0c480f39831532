use super::Distribution;
use std::fmt;

/// A query naming which family / distribution / version prefix one report
/// row represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSelection {
    pub family_name: String,
    pub distribution_id: Option<String>,
    /// Splits one distribution into several rows, e.g. "10" and "11" for Windows
    pub version_prefix: Option<String>,
}

impl TargetSelection {
    /// Selects every distribution of a family
    pub fn family(family_name: &str) -> Self {
        Self {
            family_name: family_name.to_string(),
            distribution_id: None,
            version_prefix: None,
        }
    }

    pub fn distribution(family_name: &str, distribution_id: &str) -> Self {
        Self {
            distribution_id: Some(distribution_id.to_string()),
            ..Self::family(family_name)
        }
    }

    pub fn versioned(family_name: &str, distribution_id: &str, version_prefix: &str) -> Self {
        Self {
            version_prefix: Some(version_prefix.to_string()),
            ..Self::distribution(family_name, distribution_id)
        }
    }

    /// Family name equality and, when an id is selected, distribution id
    /// equality. Both comparisons are case-sensitive.
    pub fn matches_identity(&self, family_name: &str, distribution: &Distribution) -> bool {
        if self.family_name != family_name {
            return false;
        }

        match &self.distribution_id {
            Some(id) => distribution.id == *id,
            None => true,
        }
    }

    /// With a version prefix, at least one supported version must start with it
    pub fn matches_version(&self, distribution: &Distribution) -> bool {
        match &self.version_prefix {
            Some(prefix) => distribution
                .supported_versions
                .iter()
                .any(|v| v.starts_with(prefix.as_str())),
            None => true,
        }
    }

    pub fn matches(&self, family_name: &str, distribution: &Distribution) -> bool {
        self.matches_identity(family_name, distribution) && self.matches_version(distribution)
    }

    /// Whether a supported version belongs to this row's prefix filter
    pub fn accepts_version(&self, version: &str) -> bool {
        self.version_prefix
            .as_deref()
            .map_or(true, |prefix| version.starts_with(prefix))
    }
}

impl fmt::Display for TargetSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.family_name)?;
        if let Some(id) = &self.distribution_id {
            write!(f, " {}", id)?;
        }
        if let Some(prefix) = &self.version_prefix {
            write!(f, " ({})", prefix)?;
        }
        Ok(())
    }
}

/// Support tiers of the compatibility report, each with a fixed row list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportTier {
    FirstLevel,
    SecondLevel,
    ThirdLevel,
    NonTargets,
}

impl SupportTier {
    pub const ALL: [SupportTier; 4] = [
        SupportTier::FirstLevel,
        SupportTier::SecondLevel,
        SupportTier::ThirdLevel,
        SupportTier::NonTargets,
    ];

    pub fn targets(&self) -> Vec<TargetSelection> {
        match self {
            SupportTier::FirstLevel => vec![
                TargetSelection::versioned("Windows", "windows", "10"),
                TargetSelection::versioned("Windows", "windows", "11"),
                TargetSelection::distribution("Windows", "windows-server"),
                TargetSelection::family("Android"),
            ],
            SupportTier::SecondLevel => vec![
                TargetSelection::versioned("Windows", "windows", "7"),
                TargetSelection::versioned("Windows", "windows", "8.1"),
                TargetSelection::distribution("Windows", "windows-nano-server"),
                TargetSelection::distribution("Windows", "windows-server-core"),
                TargetSelection::distribution("Linux", "alpine"),
                TargetSelection::distribution("Linux", "ubuntu"),
            ],
            SupportTier::ThirdLevel => vec![
                TargetSelection::distribution("Linux", "centos"),
                TargetSelection::distribution("Linux", "centos-stream"),
                TargetSelection::distribution("Linux", "debian"),
                TargetSelection::distribution("Linux", "fedora"),
                TargetSelection::distribution("Linux", "opensuse"),
                TargetSelection::distribution("Linux", "rhel"),
                TargetSelection::distribution("Linux", "sles"),
                TargetSelection::distribution("Apple", "macos"),
            ],
            SupportTier::NonTargets => vec![
                TargetSelection::distribution("Apple", "ios"),
                TargetSelection::distribution("Apple", "ipados"),
            ],
        }
    }
}
