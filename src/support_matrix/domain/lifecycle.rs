use chrono::NaiveDate;

/// End-of-life milestone of one OS cycle.
///
/// Variant order is the sort order: `Unknown` and `Unscheduled` are the two
/// sentinel extremes around the real dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EolDate {
    /// No lifecycle record was found
    Unknown,
    /// The provider says EOL was reached but gives no date
    Ended,
    On(NaiveDate),
    /// The provider says EOL has not been scheduled yet
    Unscheduled,
}

impl EolDate {
    pub fn known(&self) -> Option<NaiveDate> {
        match self {
            EolDate::On(date) => Some(*date),
            _ => None,
        }
    }

    pub fn is_reached(&self, today: NaiveDate) -> bool {
        match self {
            EolDate::Ended => true,
            EolDate::On(date) => *date <= today,
            EolDate::Unknown | EolDate::Unscheduled => false,
        }
    }

    /// EOL of an optional cycle record; a missing record is `Unknown`
    pub fn of(cycle: Option<&SupportCycle>) -> EolDate {
        cycle.map_or(EolDate::Unknown, |c| c.eol)
    }
}

/// Lifecycle record of one OS version as published by the lifecycle provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportCycle {
    /// Cycle identifier; single-cycle lookups may omit it
    pub cycle: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub eol: EolDate,
    pub link: Option<String>,
    pub lts: bool,
}

impl SupportCycle {
    pub fn new(eol: EolDate) -> Self {
        Self {
            cycle: None,
            release_date: None,
            eol,
            link: None,
            lts: false,
        }
    }

    pub fn with_cycle(mut self, cycle: impl Into<String>) -> Self {
        self.cycle = Some(cycle.into());
        self
    }

    pub fn with_release_date(mut self, release_date: NaiveDate) -> Self {
        self.release_date = Some(release_date);
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn is_released(&self, today: NaiveDate) -> bool {
        self.release_date.map_or(true, |date| date <= today)
    }
}

/// A display version joined with its lifecycle record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionWithEol {
    pub version: String,
    pub link: Option<String>,
    pub eol: EolDate,
}

impl VersionWithEol {
    pub fn new(version: impl Into<String>, link: Option<String>, eol: EolDate) -> Self {
        Self {
            version: version.into(),
            link,
            eol,
        }
    }
}
