use super::cross_version_aggregator::TargetRow;
use super::unsupported_detector::UnsupportedRecord;
use super::version_display::display_version;
use crate::support_matrix::domain::{EolDate, SupportCycle, VersionWithEol};
use std::collections::HashMap;

/// Lifecycle lookups keyed by the raw version string they were made for.
/// `None` records a failed or empty lookup.
pub type CycleLookup = HashMap<String, Option<SupportCycle>>;

/// An unsupported version joined with its lifecycle record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedWithEol {
    pub record: UnsupportedRecord,
    pub cycle: Option<SupportCycle>,
}

impl UnsupportedWithEol {
    pub fn eol(&self) -> EolDate {
        EolDate::of(self.cycle.as_ref())
    }
}

/// Joins fetched lifecycle records back onto report versions
pub struct EolMerge;

impl EolMerge {
    /// Builds the row's version/EOL list from its distinct raw versions.
    ///
    /// Versions without a lookup entry are skipped; versions whose lookup
    /// failed carry `EolDate::Unknown`. Version labels use the same display
    /// rules as the row's columns.
    pub fn join(row: &TargetRow, cycles: &CycleLookup) -> Vec<VersionWithEol> {
        let is_windows = row
            .representative
            .as_ref()
            .is_some_and(|d| d.is_windows());
        let prefix = row.selection.version_prefix.as_deref();

        row.distinct_versions()
            .into_iter()
            .filter_map(|version| {
                let cycle = cycles.get(&version)?;
                Some(VersionWithEol::new(
                    display_version(&version, is_windows, prefix),
                    cycle.as_ref().and_then(|c| c.link.clone()),
                    EolDate::of(cycle.as_ref()),
                ))
            })
            .collect()
    }

    /// Orders the unsupported section: distribution name ascending, then
    /// most recent EOL first
    pub fn order_unsupported(mut entries: Vec<UnsupportedWithEol>) -> Vec<UnsupportedWithEol> {
        entries.sort_by(|a, b| {
            a.record
                .distribution_name
                .cmp(&b.record.distribution_name)
                .then_with(|| b.eol().cmp(&a.eol()))
        });
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support_matrix::domain::{Distribution, ReleaseLine, TargetSelection};
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row(selection: TargetSelection, name: &str, columns: Vec<(u32, Vec<&str>)>) -> TargetRow {
        let supported: BTreeMap<ReleaseLine, Vec<String>> = columns
            .into_iter()
            .map(|(major, versions)| {
                (
                    ReleaseLine::new(major),
                    versions.into_iter().map(String::from).collect(),
                )
            })
            .collect();

        TargetRow {
            release_lines: supported.keys().copied().collect(),
            representative: Some(Distribution::new(
                selection.distribution_id.clone().unwrap_or_default(),
                name,
            )),
            selection,
            supported,
        }
    }

    #[test]
    fn test_join_uses_distinct_versions() {
        let row = row(
            TargetSelection::distribution("Linux", "ubuntu"),
            "Ubuntu",
            vec![(6, vec!["18.04", "20.04"]), (8, vec!["20.04", "22.04"])],
        );
        let mut cycles = CycleLookup::new();
        cycles.insert(
            "18.04".to_string(),
            Some(SupportCycle::new(EolDate::On(date(2023, 5, 31))).with_link("https://ubuntu.com/18.04")),
        );
        cycles.insert("20.04".to_string(), Some(SupportCycle::new(EolDate::On(date(2025, 5, 29)))));
        cycles.insert("22.04".to_string(), None);

        let joined = EolMerge::join(&row, &cycles);
        assert_eq!(
            joined,
            vec![
                VersionWithEol::new(
                    "18.04",
                    Some("https://ubuntu.com/18.04".to_string()),
                    EolDate::On(date(2023, 5, 31))
                ),
                VersionWithEol::new("20.04", None, EolDate::On(date(2025, 5, 29))),
                VersionWithEol::new("22.04", None, EolDate::Unknown),
            ]
        );
    }

    #[test]
    fn test_join_prettifies_windows_versions() {
        let row = row(
            TargetSelection::versioned("Windows", "windows", "11"),
            "Windows",
            vec![(8, vec!["11-24h2-e"])],
        );
        let mut cycles = CycleLookup::new();
        cycles.insert(
            "11-24h2-e".to_string(),
            Some(SupportCycle::new(EolDate::On(date(2027, 10, 12)))),
        );

        let joined = EolMerge::join(&row, &cycles);
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].version, "24H2-E");
    }

    #[test]
    fn test_join_skips_versions_without_lookup() {
        let row = row(
            TargetSelection::distribution("Linux", "alpine"),
            "Alpine",
            vec![(8, vec!["3.19", "3.18"])],
        );
        let mut cycles = CycleLookup::new();
        cycles.insert("3.19".to_string(), None);

        assert_eq!(EolMerge::join(&row, &cycles).len(), 1);
    }

    fn unsupported(name: &str, version: &str, eol: Option<EolDate>) -> UnsupportedWithEol {
        UnsupportedWithEol {
            record: UnsupportedRecord {
                distribution_id: name.to_lowercase(),
                distribution_name: name.to_string(),
                version: version.to_string(),
            },
            cycle: eol.map(SupportCycle::new),
        }
    }

    #[test]
    fn test_order_unsupported_by_name_then_latest_eol() {
        let ordered = EolMerge::order_unsupported(vec![
            unsupported("Ubuntu", "16.04", Some(EolDate::On(date(2021, 4, 30)))),
            unsupported("Alpine", "3.15", None),
            unsupported("Ubuntu", "18.04", Some(EolDate::On(date(2023, 5, 31)))),
            unsupported("Alpine", "3.16", Some(EolDate::On(date(2024, 5, 23)))),
        ]);

        let order: Vec<&str> = ordered.iter().map(|e| e.record.version.as_str()).collect();
        assert_eq!(order, vec!["3.16", "3.15", "18.04", "16.04"]);
    }
}
