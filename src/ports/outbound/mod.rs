/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod lifecycle_repository;
pub mod output_presenter;
pub mod progress_reporter;
pub mod release_notes_repository;
pub mod report_formatter;
pub mod template_reader;

pub use lifecycle_repository::LifecycleRepository;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use release_notes_repository::{ReleaseOverviewRepository, SupportMatrixRepository};
pub use report_formatter::ReportFormatter;
pub use template_reader::TemplateReader;
