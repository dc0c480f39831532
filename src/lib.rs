//! os-support - reconcile OS support metadata across release lines
//!
//! This library merges per-release-line support matrices with lifecycle data
//! from endoflife.date, renders the consolidated markdown compatibility report
//! and checks a single release line for undocumented support anomalies. It
//! follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`support_matrix`): Pure reconciliation logic and domain models
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use os_support::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let release_notes = ReleaseNotesClient::new(ReleaseNotesSource::resolve(None))?;
//! let lifecycle = CachingLifecycleRepository::new(EndOfLifeClient::new()?);
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = GenerateSupportReportUseCase::new(release_notes, lifecycle, progress_reporter);
//!
//! // Execute
//! let today = chrono::Local::now().date_naive();
//! let request = ReportRequest::new(
//!     vec![ReleaseLine::new(6), ReleaseLine::new(7), ReleaseLine::new(8)],
//!     vec![ReleaseLine::new(6), ReleaseLine::new(8)],
//!     ".NET",
//!     "https://github.com/dotnet/core/blob/main/release-notes/{version}/supported-os.md",
//!     today,
//! );
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let template = "PLACEHOLDER-FIRST-LEVEL-TARGETS\n";
//! let output = SupportReportFormatter::new().format(&response.model, template)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;
pub mod support_matrix;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{CheckFormatter, SupportReportFormatter};
    pub use crate::adapters::outbound::network::{
        CachingLifecycleRepository, EndOfLifeClient, ReleaseNotesClient, ReleaseNotesSource,
    };
    pub use crate::application::dto::{CheckRequest, CheckResponse, ReportRequest, ReportResponse};
    pub use crate::application::read_models::{ReportSection, SupportReportModel};
    pub use crate::application::use_cases::{CheckExceptionsUseCase, GenerateSupportReportUseCase};
    pub use crate::ports::outbound::{
        LifecycleRepository, OutputPresenter, ProgressReporter, ReleaseOverviewRepository,
        ReportFormatter, SupportMatrixRepository, TemplateReader,
    };
    pub use crate::support_matrix::domain::{
        Anomaly, AnomalyCategory, CheckOutcome, Distribution, EolDate, ExceptionTable, Family,
        ReleaseLine, ReleaseOverview, SupportCycle, SupportMatrix, SupportPhase, SupportTier,
        TargetSelection,
    };
    pub use crate::support_matrix::services::{AnomalyChecker, ReleaseStatusService, StatusWindow};
    pub use crate::shared::Result;
}
