use super::version_display::display_versions;
use crate::support_matrix::domain::{Distribution, ReleaseCatalog, ReleaseLine, TargetSelection};
use crate::support_matrix::policies::RepresentativeSlot;
use std::collections::BTreeMap;

/// One report row: a target selection merged across release lines.
///
/// `supported` holds, per release line that has an identity and version
/// match, the raw supported versions that pass the selection's prefix
/// filter. Each release line keeps its own list; lists are never unioned.
#[derive(Debug, Clone)]
pub struct TargetRow {
    pub selection: TargetSelection,
    /// Release lines shown as columns, ascending
    pub release_lines: Vec<ReleaseLine>,
    pub representative: Option<Distribution>,
    pub supported: BTreeMap<ReleaseLine, Vec<String>>,
}

impl TargetRow {
    /// Display versions for one column, or `None` when the target is not
    /// supported by that release line
    pub fn column_versions(&self, release_line: ReleaseLine) -> Option<Vec<String>> {
        let representative = self.representative.as_ref()?;
        let versions = self.supported.get(&release_line)?;
        if versions.is_empty() {
            return None;
        }

        Some(display_versions(
            versions,
            representative.is_windows(),
            self.selection.version_prefix.as_deref(),
        ))
    }

    pub fn architectures(&self) -> &[String] {
        self.representative
            .as_ref()
            .map(|d| d.architectures.as_slice())
            .unwrap_or(&[])
    }

    /// Row label: the representative's name, or the selection itself when
    /// nothing matched, followed by the version prefix
    pub fn display_name(&self) -> String {
        let base = self
            .representative
            .as_ref()
            .map(|d| d.name.clone())
            .unwrap_or_else(|| self.selection.to_string());

        match &self.selection.version_prefix {
            Some(prefix) => format!("{} {}", base, prefix),
            None => base,
        }
    }

    /// Raw versions across every column, first occurrence order, deduplicated
    pub fn distinct_versions(&self) -> Vec<String> {
        let mut distinct: Vec<String> = Vec::new();
        for version in self.supported.values().flatten() {
            if !distinct.contains(version) {
                distinct.push(version.clone());
            }
        }
        distinct
    }
}

/// Merges matching distributions across release lines into report rows
pub struct CrossVersionAggregator;

impl CrossVersionAggregator {
    /// Builds the row for `selection` over the `current` release lines of
    /// `catalog`.
    ///
    /// Within a release line the first identity match stands for the
    /// target. The representative is chosen by [`RepresentativeSlot`]
    /// (latest release line wins). Release lines missing from the catalog
    /// or with no matrix contribute nothing.
    pub fn aggregate(
        catalog: &ReleaseCatalog,
        current: &[ReleaseLine],
        selection: &TargetSelection,
    ) -> TargetRow {
        let release_lines = catalog.subset(current);
        let mut representative = RepresentativeSlot::new();
        let mut supported = BTreeMap::new();

        for &release_line in &release_lines {
            let matched = catalog
                .entries_for(release_line)
                .find(|entry| selection.matches_identity(entry.family_name, entry.distribution));

            let Some(entry) = matched else {
                continue;
            };
            representative.offer(release_line, entry.distribution);

            if selection.matches_version(entry.distribution) {
                let versions: Vec<String> = entry
                    .distribution
                    .supported_versions
                    .iter()
                    .filter(|v| selection.accepts_version(v))
                    .cloned()
                    .collect();
                supported.insert(release_line, versions);
            }
        }

        TargetRow {
            selection: selection.clone(),
            release_lines,
            representative: representative.into_distribution(),
            supported,
        }
    }
}
