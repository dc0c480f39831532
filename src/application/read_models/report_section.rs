//! Template sections and their placeholder lines

use crate::support_matrix::domain::SupportTier;

/// Reserved prefix marking a template line as a placeholder
pub const PLACEHOLDER_PREFIX: &str = "PLACEHOLDER-";

/// A generated part of the report, substituted for one template line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportSection {
    Targets(SupportTier),
    Unsupported,
}

impl ReportSection {
    pub const ALL: [ReportSection; 5] = [
        ReportSection::Targets(SupportTier::FirstLevel),
        ReportSection::Targets(SupportTier::SecondLevel),
        ReportSection::Targets(SupportTier::ThirdLevel),
        ReportSection::Targets(SupportTier::NonTargets),
        ReportSection::Unsupported,
    ];

    pub fn placeholder(&self) -> &'static str {
        match self {
            ReportSection::Targets(SupportTier::FirstLevel) => "PLACEHOLDER-FIRST-LEVEL-TARGETS",
            ReportSection::Targets(SupportTier::SecondLevel) => "PLACEHOLDER-SECOND-LEVEL-TARGETS",
            ReportSection::Targets(SupportTier::ThirdLevel) => "PLACEHOLDER-THIRD-LEVEL-TARGETS",
            ReportSection::Targets(SupportTier::NonTargets) => "PLACEHOLDER-NON-TARGETS",
            ReportSection::Unsupported => "PLACEHOLDER-UNSUPPORTED",
        }
    }

    /// Section for a template line, compared after trimming surrounding
    /// whitespace. `None` for ordinary lines and unknown placeholders.
    pub fn from_placeholder(line: &str) -> Option<Self> {
        let line = line.trim();
        Self::ALL
            .into_iter()
            .find(|section| section.placeholder() == line)
    }

    pub fn is_placeholder_line(line: &str) -> bool {
        line.trim_start().starts_with(PLACEHOLDER_PREFIX)
    }
}
