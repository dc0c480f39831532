use crate::shared::Result;
use std::fmt;
use std::str::FromStr;

/// One major version track of the host platform (e.g. `8` for "8.0").
///
/// Ordering is numeric, which is also the chronological release order the
/// reconciliation services depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReleaseLine(u32);

impl ReleaseLine {
    pub fn new(major: u32) -> Self {
        Self(major)
    }

    pub fn major(&self) -> u32 {
        self.0
    }

    /// Channel version string used in release-notes paths, e.g. "8.0"
    pub fn channel_version(&self) -> String {
        format!("{}.0", self.0)
    }
}

impl fmt::Display for ReleaseLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.0", self.0)
    }
}

impl FromStr for ReleaseLine {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let major = trimmed
            .parse::<u32>()
            .map_err(|_| anyhow::anyhow!("'{}' is not a major version number", s))?;
        Ok(Self(major))
    }
}
