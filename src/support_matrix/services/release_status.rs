use crate::support_matrix::domain::{
    Distribution, DistributionStatus, EolDate, ExceptionTable, FamilyStatus, ReleaseLine,
    ReleaseReport, SupportCycle, SupportMatrix,
};
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

/// Default width of the "EOL soon" warning window
pub const DEFAULT_EOL_SOON_DAYS: i64 = 90;

/// Point in time the statuses are computed for
#[derive(Debug, Clone, Copy)]
pub struct StatusWindow {
    pub today: NaiveDate,
    pub eol_soon_days: i64,
}

impl StatusWindow {
    pub fn new(today: NaiveDate, eol_soon_days: i64) -> Self {
        Self {
            today,
            eol_soon_days,
        }
    }

    /// Last day still counted as "EOL soon", saturating at the calendar's end
    fn horizon(&self) -> NaiveDate {
        Duration::try_days(self.eol_soon_days)
            .and_then(|days| self.today.checked_add_signed(days))
            .unwrap_or(NaiveDate::MAX)
    }
}

/// Derives each distribution's lifecycle status for one release line from
/// its support matrix and the upstream cycle list
pub struct ReleaseStatusService;

impl ReleaseStatusService {
    /// # Arguments
    /// * `cycles` - Upstream cycles per distribution id; a distribution
    ///   without an entry gets empty status lists
    /// * `exceptions` - Attached to each distribution status as is
    pub fn build_report(
        release_line: ReleaseLine,
        matrix: &SupportMatrix,
        cycles: &HashMap<String, Vec<SupportCycle>>,
        exceptions: &ExceptionTable,
        window: StatusWindow,
    ) -> ReleaseReport {
        let families = matrix
            .families
            .iter()
            .map(|family| FamilyStatus {
                name: family.name.clone(),
                distributions: family
                    .distributions
                    .iter()
                    .map(|distribution| {
                        let upstream = cycles
                            .get(&distribution.id)
                            .map(Vec::as_slice)
                            .unwrap_or(&[]);
                        let mut status = Self::distribution_status(distribution, upstream, window);
                        status.exceptions = exceptions.for_distribution(&distribution.id);
                        status
                    })
                    .collect(),
            })
            .collect();

        ReleaseReport {
            release_line,
            families,
        }
    }

    fn distribution_status(
        distribution: &Distribution,
        upstream: &[SupportCycle],
        window: StatusWindow,
    ) -> DistributionStatus {
        let mut status = DistributionStatus::new(&distribution.id, &distribution.name);
        let by_cycle: HashMap<&str, &SupportCycle> = upstream
            .iter()
            .filter_map(|c| c.cycle.as_deref().map(|id| (id, c)))
            .collect();

        for version in &distribution.supported_versions {
            let Some(cycle) = by_cycle.get(version.as_str()) else {
                continue;
            };

            if cycle.eol.is_reached(window.today) {
                status.eol_but_supported.push(version.clone());
            } else if let EolDate::On(date) = cycle.eol {
                if date <= window.horizon() {
                    status.eol_soon.push(version.clone());
                }
            }
        }

        for cycle in upstream {
            let Some(id) = cycle.cycle.as_deref() else {
                continue;
            };
            if cycle.is_released(window.today)
                && !cycle.eol.is_reached(window.today)
                && !distribution.lists(id)
            {
                status.missing.push(id.to_string());
            }
        }

        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support_matrix::domain::Family;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn window() -> StatusWindow {
        StatusWindow::new(date(2024, 1, 1), DEFAULT_EOL_SOON_DAYS)
    }

    fn cycle(id: &str, eol: EolDate) -> SupportCycle {
        SupportCycle::new(eol).with_cycle(id)
    }

    fn matrix(distribution: Distribution) -> SupportMatrix {
        SupportMatrix::new("8.0", vec![Family::new("Linux", vec![distribution])])
    }

    fn single_status(
        distribution: Distribution,
        upstream: Vec<SupportCycle>,
        exceptions: &ExceptionTable,
    ) -> DistributionStatus {
        let id = distribution.id.clone();
        let mut cycles = HashMap::new();
        cycles.insert(id, upstream);
        let report = ReleaseStatusService::build_report(
            ReleaseLine::new(8),
            &matrix(distribution),
            &cycles,
            exceptions,
            window(),
        );
        report.families[0].distributions[0].clone()
    }

    #[test]
    fn test_eol_soon_within_window() {
        let status = single_status(
            Distribution::new("fedora", "Fedora").with_supported_versions(["39", "40"]),
            vec![
                cycle("39", EolDate::On(date(2024, 2, 15))),
                cycle("40", EolDate::On(date(2024, 11, 12))),
            ],
            &ExceptionTable::new(),
        );

        assert_eq!(status.eol_soon, vec!["39"]);
        assert!(status.eol_but_supported.is_empty());
    }

    #[test]
    fn test_huge_eol_soon_window_saturates() {
        assert_eq!(StatusWindow::new(date(2024, 1, 1), 1_000_000_000).horizon(), NaiveDate::MAX);
        assert_eq!(StatusWindow::new(date(2024, 1, 1), i64::MAX).horizon(), NaiveDate::MAX);
        assert_eq!(StatusWindow::new(date(2024, 1, 1), 31).horizon(), date(2024, 2, 1));
    }

    #[test]
    fn test_huge_eol_soon_window_flags_every_dated_cycle() {
        let distribution = Distribution::new("fedora", "Fedora").with_supported_versions(["40"]);
        let mut cycles = HashMap::new();
        cycles.insert(
            distribution.id.clone(),
            vec![cycle("40", EolDate::On(date(2030, 5, 1)))],
        );
        let report = ReleaseStatusService::build_report(
            ReleaseLine::new(8),
            &matrix(distribution),
            &cycles,
            &ExceptionTable::new(),
            StatusWindow::new(date(2024, 1, 1), 1_000_000_000),
        );

        assert_eq!(report.families[0].distributions[0].eol_soon, vec!["40"]);
    }

    #[test]
    fn test_eol_but_supported() {
        let status = single_status(
            Distribution::new("ubuntu", "Ubuntu").with_supported_versions(["18.04", "16.04"]),
            vec![
                cycle("18.04", EolDate::On(date(2023, 5, 31))),
                cycle("16.04", EolDate::Ended),
            ],
            &ExceptionTable::new(),
        );

        assert_eq!(status.eol_but_supported, vec!["18.04", "16.04"]);
        assert!(status.eol_soon.is_empty());
    }

    #[test]
    fn test_missing_active_cycles() {
        let status = single_status(
            Distribution::new("alpine", "Alpine")
                .with_supported_versions(["3.18"])
                .with_unsupported_versions(["3.16"]),
            vec![
                cycle("3.19", EolDate::On(date(2025, 11, 1))),
                cycle("3.18", EolDate::On(date(2025, 5, 9))),
                cycle("3.16", EolDate::On(date(2024, 5, 23))),
                cycle("3.15", EolDate::On(date(2023, 11, 1))),
                cycle("3.20", EolDate::Unscheduled).with_release_date(date(2024, 5, 22)),
            ],
            &ExceptionTable::new(),
        );

        assert_eq!(status.missing, vec!["3.19"]);
    }

    #[test]
    fn test_unknown_distribution_has_empty_status() {
        let report = ReleaseStatusService::build_report(
            ReleaseLine::new(8),
            &matrix(Distribution::new("rhel", "RHEL").with_supported_versions(["9"])),
            &HashMap::new(),
            &ExceptionTable::new(),
            window(),
        );

        let status = &report.families[0].distributions[0];
        assert!(status.eol_soon.is_empty());
        assert!(status.eol_but_supported.is_empty());
        assert!(status.missing.is_empty());
    }

    #[test]
    fn test_exceptions_are_attached() {
        let exceptions = ExceptionTable::new().with_exception("ubuntu", "20.04", "Kept");
        let status = single_status(
            Distribution::new("ubuntu", "Ubuntu").with_supported_versions(["20.04"]),
            vec![],
            &exceptions,
        );

        assert_eq!(status.exceptions.get("20.04").map(String::as_str), Some("Kept"));
    }
}
