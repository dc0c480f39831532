use crate::support_matrix::domain::{Distribution, ReleaseLine};

/// Latest-release-line-wins policy for a report row's representative
/// distribution.
///
/// A row shows one display name, link, lifecycle link and architecture list
/// even though every release line lists the distribution separately. Matches
/// are offered in ascending release order and each offer replaces the
/// current holder, so the newest release line's metadata is what the row
/// shows.
#[derive(Debug, Clone, Default)]
pub struct RepresentativeSlot {
    current: Option<(ReleaseLine, Distribution)>,
}

impl RepresentativeSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a match from `release_line`.
    ///
    /// Offers from an older release line than the current holder are
    /// ignored, so the outcome does not depend on the caller's iteration
    /// order.
    pub fn offer(&mut self, release_line: ReleaseLine, distribution: &Distribution) {
        let replace = match &self.current {
            Some((held, _)) => release_line >= *held,
            None => true,
        };

        if replace {
            self.current = Some((release_line, distribution.clone()));
        }
    }

    pub fn release_line(&self) -> Option<ReleaseLine> {
        self.current.as_ref().map(|(line, _)| *line)
    }

    pub fn into_distribution(self) -> Option<Distribution> {
        self.current.map(|(_, distribution)| distribution)
    }
}
