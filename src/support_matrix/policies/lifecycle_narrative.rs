use crate::support_matrix::domain::VersionWithEol;
use chrono::NaiveDate;

/// Selects the lifecycle entries a report row narrates: every entry whose
/// EOL already passed, plus the next upcoming one.
///
/// Entries without a known EOL date are dropped. The rest are ordered by
/// EOL date ascending and the walk stops right after the first entry whose
/// EOL is later than `today`.
pub struct LifecycleNarrativePolicy;

impl LifecycleNarrativePolicy {
    pub fn select(entries: &[VersionWithEol], today: NaiveDate) -> Vec<VersionWithEol> {
        let mut dated: Vec<(NaiveDate, &VersionWithEol)> = entries
            .iter()
            .filter_map(|entry| entry.eol.known().map(|date| (date, entry)))
            .collect();
        dated.sort_by_key(|(date, _)| *date);

        let mut selected = Vec::new();
        for (date, entry) in dated {
            selected.push(entry.clone());
            if date > today {
                break;
            }
        }
        selected
    }
}
