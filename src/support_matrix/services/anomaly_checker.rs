use crate::support_matrix::domain::{
    Anomaly, AnomalyCategory, CheckOutcome, DistributionStatus, ReleaseReport,
};

/// Reports a release line's lifecycle discrepancies that maintainers have
/// not documented as exceptions
pub struct AnomalyChecker;

impl AnomalyChecker {
    /// Checks every distribution of `report`.
    ///
    /// When the release line is itself end-of-life the checks are skipped:
    /// its documents describe the state at EOL, so comparing them against
    /// today's lifecycle data would flag everything.
    pub fn check(report: &ReleaseReport, release_line_is_eol: bool) -> CheckOutcome {
        if release_line_is_eol {
            return CheckOutcome::ReleaseLineEol;
        }

        let anomalies = report
            .families
            .iter()
            .flat_map(|family| family.distributions.iter())
            .flat_map(Self::check_distribution)
            .collect();

        CheckOutcome::Checked(anomalies)
    }

    fn check_distribution(distribution: &DistributionStatus) -> Vec<Anomaly> {
        let categories = [
            (AnomalyCategory::EolSoon, &distribution.eol_soon),
            (AnomalyCategory::EolButSupported, &distribution.eol_but_supported),
            (AnomalyCategory::Missing, &distribution.missing),
        ];

        categories
            .into_iter()
            .flat_map(|(category, versions)| {
                versions
                    .iter()
                    .filter(|version| !distribution.exceptions.contains_key(version.as_str()))
                    .map(move |version| Anomaly {
                        distribution_id: distribution.id.clone(),
                        distribution_name: distribution.name.clone(),
                        version: version.clone(),
                        category,
                    })
            })
            .collect()
    }
}
