use crate::support_matrix::domain::CatalogEntry;
use std::collections::{HashMap, HashSet};

/// A distribution version that no processed release line supports any more
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnsupportedRecord {
    pub distribution_id: String,
    pub distribution_name: String,
    pub version: String,
}

/// Finds versions that are listed as unsupported somewhere and supported
/// nowhere.
///
/// This is a set difference over all release lines at once: a version
/// unsupported by one release line but still supported by another is not
/// reported.
pub struct UnsupportedDetector;

impl UnsupportedDetector {
    pub fn detect<'a, I>(entries: I) -> Vec<UnsupportedRecord>
    where
        I: IntoIterator<Item = CatalogEntry<'a>>,
    {
        let entries: Vec<CatalogEntry<'a>> = entries.into_iter().collect();

        // Pass 1: every version any release line supports, per distribution id
        let mut supported: HashMap<&str, HashSet<&str>> = HashMap::new();
        for entry in &entries {
            let versions = supported.entry(entry.distribution.id.as_str()).or_default();
            versions.extend(entry.distribution.supported_versions.iter().map(String::as_str));
        }

        // Pass 2: unsupported candidates not in that index
        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        let mut records = Vec::new();
        for entry in &entries {
            let id = entry.distribution.id.as_str();
            for version in &entry.distribution.unsupported_versions {
                let still_supported = supported
                    .get(id)
                    .is_some_and(|versions| versions.contains(version.as_str()));
                if still_supported || !seen.insert((id, version.as_str())) {
                    continue;
                }

                records.push(UnsupportedRecord {
                    distribution_id: id.to_string(),
                    distribution_name: entry.distribution.name.clone(),
                    version: version.clone(),
                });
            }
        }

        records
    }
}
