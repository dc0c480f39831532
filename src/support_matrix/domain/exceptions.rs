use std::collections::{BTreeMap, HashMap};

/// Maintainer-curated exceptions: distribution id → version → note.
///
/// An entry suppresses anomaly diagnostics for exactly that
/// (distribution, version) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExceptionTable {
    entries: HashMap<String, BTreeMap<String, String>>,
}

impl ExceptionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, distribution_id: &str, version: &str, note: &str) {
        self.entries
            .entry(distribution_id.to_string())
            .or_default()
            .insert(version.to_string(), note.to_string());
    }

    pub fn with_exception(mut self, distribution_id: &str, version: &str, note: &str) -> Self {
        self.insert(distribution_id, version, note);
        self
    }

    /// Version → note table for one distribution (empty when none recorded)
    pub fn for_distribution(&self, distribution_id: &str) -> BTreeMap<String, String> {
        self.entries
            .get(distribution_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_distribution_returns_only_its_entries() {
        let table = ExceptionTable::new()
            .with_exception("ubuntu", "20.04", "Kept for LTS customers")
            .with_exception("debian", "11", "Extended support");

        let ubuntu = table.for_distribution("ubuntu");
        assert_eq!(ubuntu.len(), 1);
        assert_eq!(
            ubuntu.get("20.04").map(String::as_str),
            Some("Kept for LTS customers")
        );
        assert!(table.for_distribution("alpine").is_empty());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_insert_overwrites_note() {
        let mut table = ExceptionTable::new();
        table.insert("ubuntu", "20.04", "first");
        table.insert("ubuntu", "20.04", "second");
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.for_distribution("ubuntu").get("20.04").map(String::as_str),
            Some("second")
        );
    }
}
