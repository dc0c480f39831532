/// Integration tests for the application layer
mod test_utilities;

use chrono::NaiveDate;
use os_support::prelude::*;
use test_utilities::mocks::*;

const RELEASE_NOTES_LINK: &str = "https://example.com/release-notes/{version}/supported-os.md";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ubuntu(supported: &[&str], unsupported: &[&str]) -> Distribution {
    Distribution::new("ubuntu", "Ubuntu")
        .with_supported_versions(supported.iter().copied())
        .with_unsupported_versions(unsupported.iter().copied())
        .with_architectures(["Arm64", "x64"])
        .with_link("https://ubuntu.com/")
        .with_lifecycle("https://wiki.ubuntu.com/Releases")
}

fn linux(distributions: Vec<Distribution>) -> Vec<Family> {
    vec![Family::new("Linux", distributions)]
}

fn report_repository() -> MockReleaseNotesRepository {
    MockReleaseNotesRepository::new()
        .with_matrix(6, linux(vec![ubuntu(&["22.04", "20.04"], &["18.04", "16.04"])]))
        .with_matrix(7, linux(vec![ubuntu(&["22.04"], &["20.04", "18.04"])]))
        .with_matrix(8, linux(vec![ubuntu(&["24.04", "22.04"], &["20.04"])]))
}

fn report_lifecycle() -> MockLifecycleRepository {
    MockLifecycleRepository::new()
        .with_cycle("ubuntu", "24.04", EolDate::On(date(2029, 5, 31)))
        .with_cycle("ubuntu", "22.04", EolDate::On(date(2027, 4, 1)))
        .with_cycle("ubuntu", "20.04", EolDate::On(date(2025, 5, 31)))
        .with_cycle("ubuntu", "18.04", EolDate::On(date(2023, 5, 31)))
}

fn report_request() -> ReportRequest {
    ReportRequest::new(
        vec![ReleaseLine::new(6), ReleaseLine::new(7), ReleaseLine::new(8)],
        vec![ReleaseLine::new(6), ReleaseLine::new(8)],
        ".NET",
        RELEASE_NOTES_LINK,
        date(2026, 1, 10),
    )
}

#[tokio::test]
async fn test_generate_report_happy_path() {
    let progress_reporter = MockProgressReporter::new();
    let use_case = GenerateSupportReportUseCase::new(
        report_repository(),
        report_lifecycle(),
        progress_reporter.clone(),
    );

    let response = use_case.execute(report_request()).await.unwrap();

    assert!(response.unavailable_release_lines.is_empty());
    let titles: Vec<&str> = response
        .model
        .columns
        .iter()
        .map(|c| c.title.as_str())
        .collect();
    assert_eq!(titles, vec![".NET 6.0", ".NET 8.0"]);
    assert_eq!(
        response.model.columns[1].link,
        "https://example.com/release-notes/8.0/supported-os.md"
    );

    // 20.04 is still supported by 6.0, so only 18.04 and 16.04 are listed
    let unsupported: Vec<(&str, EolDate)> = response
        .model
        .unsupported
        .iter()
        .map(|row| (row.version.as_str(), row.eol))
        .collect();
    assert_eq!(
        unsupported,
        vec![
            ("18.04", EolDate::On(date(2023, 5, 31))),
            ("16.04", EolDate::Unknown),
        ]
    );

    let errors = progress_reporter.errors();
    assert!(errors.iter().any(|e| e.contains("ubuntu 16.04")));
}

#[tokio::test]
async fn test_generate_report_renders_template() {
    let use_case = GenerateSupportReportUseCase::new(
        report_repository(),
        report_lifecycle(),
        MockProgressReporter::new(),
    );
    let response = use_case.execute(report_request()).await.unwrap();

    let template = "# Supported OS\n\n## Second level\n\nPLACEHOLDER-SECOND-LEVEL-TARGETS\n\n## Unsupported\n\nPLACEHOLDER-UNSUPPORTED\n";
    let output = SupportReportFormatter::new()
        .format(&response.model, template)
        .unwrap();

    assert!(output.starts_with("# Supported OS\n\n## Second level\n\n| **<u>Operating System</u>**"));
    assert!(output.contains("[.NET 6.0](https://example.com/release-notes/6.0/supported-os.md)"));
    assert!(output.contains("| **[Ubuntu][1]**"));
    assert!(output.contains("(/)<br/>Versions: 24.04, 22.04<br/>Architectures: Arm64, x64"));
    assert!(output.contains("| **OS**"));
    assert!(output.contains("[2023-05-31]["));
    assert!(output.contains("\n[1]: https://ubuntu.com/\n"));
    assert!(!output.contains("PLACEHOLDER-"));
}

#[tokio::test]
async fn test_generate_report_skips_unavailable_release_line() {
    let repository = MockReleaseNotesRepository::new()
        .with_matrix(6, linux(vec![ubuntu(&["22.04"], &[])]))
        .with_matrix(8, linux(vec![ubuntu(&["24.04"], &[])]));
    let progress_reporter = MockProgressReporter::new();
    let use_case = GenerateSupportReportUseCase::new(
        repository,
        MockLifecycleRepository::new(),
        progress_reporter.clone(),
    );

    let response = use_case.execute(report_request()).await.unwrap();

    assert_eq!(response.unavailable_release_lines, vec![ReleaseLine::new(7)]);
    assert_eq!(response.model.columns.len(), 2);
    assert!(progress_reporter
        .errors()
        .iter()
        .any(|e| e.contains("Failed to load support matrix for 7.0")));
}

#[tokio::test]
async fn test_generate_report_fails_without_any_release_line() {
    let use_case = GenerateSupportReportUseCase::new(
        MockReleaseNotesRepository::new(),
        MockLifecycleRepository::new(),
        MockProgressReporter::new(),
    );

    let result = use_case.execute(report_request()).await;
    assert!(result.is_err());
}

fn check_repository(phase: SupportPhase) -> MockReleaseNotesRepository {
    MockReleaseNotesRepository::new()
        .with_phase(8, phase)
        .with_matrix(
            8,
            linux(vec![
                ubuntu(&["24.04", "22.04"], &["18.04"]),
                Distribution::new("alpine", "Alpine").with_supported_versions(["3.20"]),
            ]),
        )
}

fn check_lifecycle() -> MockLifecycleRepository {
    MockLifecycleRepository::new()
        .with_cycle("ubuntu", "25.10", EolDate::On(date(2026, 7, 9)))
        .with_cycle("ubuntu", "24.04", EolDate::On(date(2029, 5, 31)))
        .with_cycle("ubuntu", "22.04", EolDate::On(date(2026, 3, 1)))
        .with_cycle("ubuntu", "20.04", EolDate::On(date(2025, 5, 31)))
        .with_released_cycle("ubuntu", "26.04", date(2026, 4, 23), EolDate::Unscheduled)
        .with_cycle("alpine", "3.20", EolDate::Ended)
}

#[tokio::test]
async fn test_check_reports_anomalies() {
    let use_case = CheckExceptionsUseCase::new(
        check_repository(SupportPhase::Active),
        check_lifecycle(),
        MockProgressReporter::new(),
    );

    let request = CheckRequest::new(ReleaseLine::new(8), date(2026, 1, 10));
    let response = use_case.execute(request).await.unwrap();

    assert!(response.has_anomalies());
    let output = CheckFormatter::new(".NET").format(&response);
    // 26.04 is not released yet and 20.04 already reached EOL
    assert_eq!(
        output,
        "* .NET 8.0\n\
         ** Ubuntu 22.04: EOL Soon\n\
         ** Ubuntu 25.10: Currently missing\n\
         ** Alpine 3.20: EOL but still supported\n"
    );
}

#[tokio::test]
async fn test_check_exceptions_suppress_anomalies() {
    let use_case = CheckExceptionsUseCase::new(
        check_repository(SupportPhase::Maintenance),
        check_lifecycle(),
        MockProgressReporter::new(),
    );

    let exceptions = ExceptionTable::new()
        .with_exception("ubuntu", "22.04", "Supported until 8.0 goes out of support")
        .with_exception("ubuntu", "25.10", "Interim release")
        .with_exception("alpine", "3.20", "Kept for existing images");
    let request =
        CheckRequest::new(ReleaseLine::new(8), date(2026, 1, 10)).with_exceptions(exceptions);
    let response = use_case.execute(request).await.unwrap();

    assert!(!response.has_anomalies());
    assert_eq!(CheckFormatter::new(".NET").format(&response), "* .NET 8.0\n");
}

#[tokio::test]
async fn test_check_eol_release_line_skips_checks() {
    let progress_reporter = MockProgressReporter::new();
    let use_case = CheckExceptionsUseCase::new(
        check_repository(SupportPhase::Eol),
        MockLifecycleRepository::new(),
        progress_reporter.clone(),
    );

    let request = CheckRequest::new(ReleaseLine::new(8), date(2026, 1, 10));
    let response = use_case.execute(request).await.unwrap();

    assert_eq!(response.outcome, CheckOutcome::ReleaseLineEol);
    assert!(progress_reporter.errors().is_empty());
}

#[tokio::test]
async fn test_check_missing_release_line_is_fatal() {
    let use_case = CheckExceptionsUseCase::new(
        MockReleaseNotesRepository::new(),
        MockLifecycleRepository::new(),
        MockProgressReporter::new(),
    );

    let request = CheckRequest::new(ReleaseLine::new(9), date(2026, 1, 10));
    assert!(use_case.execute(request).await.is_err());
}
