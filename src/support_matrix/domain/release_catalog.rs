use super::{Distribution, ReleaseLine, SupportMatrix};
use std::collections::BTreeMap;

/// One distribution as seen by one release line
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry<'a> {
    pub release_line: ReleaseLine,
    pub family_name: &'a str,
    pub distribution: &'a Distribution,
}

/// Support matrices of every release line processed in one report run.
///
/// A release line whose matrix could not be fetched is kept with `None` so
/// it still gets a column; it simply contributes no distributions. Iteration
/// is always in ascending release order.
#[derive(Debug, Clone, Default)]
pub struct ReleaseCatalog {
    matrices: BTreeMap<ReleaseLine, Option<SupportMatrix>>,
}

impl ReleaseCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, release_line: ReleaseLine, matrix: Option<SupportMatrix>) {
        self.matrices.insert(release_line, matrix);
    }

    pub fn with_matrix(mut self, release_line: ReleaseLine, matrix: SupportMatrix) -> Self {
        self.insert(release_line, Some(matrix));
        self
    }

    pub fn release_lines(&self) -> Vec<ReleaseLine> {
        self.matrices.keys().copied().collect()
    }

    /// Release lines whose matrix is missing
    pub fn unavailable_lines(&self) -> Vec<ReleaseLine> {
        self.matrices
            .iter()
            .filter(|(_, matrix)| matrix.is_none())
            .map(|(line, _)| *line)
            .collect()
    }

    pub fn matrix(&self, release_line: ReleaseLine) -> Option<&SupportMatrix> {
        self.matrices.get(&release_line).and_then(Option::as_ref)
    }

    pub fn entries_for(&self, release_line: ReleaseLine) -> impl Iterator<Item = CatalogEntry<'_>> {
        self.matrix(release_line)
            .into_iter()
            .flat_map(move |matrix| {
                matrix
                    .distributions()
                    .map(move |(family_name, distribution)| CatalogEntry {
                        release_line,
                        family_name,
                        distribution,
                    })
            })
    }

    /// Every distribution of every release line, oldest release line first
    pub fn entries(&self) -> impl Iterator<Item = CatalogEntry<'_>> {
        self.matrices
            .keys()
            .flat_map(move |line| self.entries_for(*line))
    }

    /// The requested release lines that this catalog holds, ascending
    pub fn subset(&self, requested: &[ReleaseLine]) -> Vec<ReleaseLine> {
        self.matrices
            .keys()
            .filter(|line| requested.contains(line))
            .copied()
            .collect()
    }
}
