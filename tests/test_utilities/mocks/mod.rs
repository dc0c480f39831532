//! Mock implementations for testing
#![allow(dead_code)]

mod mock_lifecycle_repository;
mod mock_progress_reporter;
mod mock_release_notes_repository;

pub use mock_lifecycle_repository::MockLifecycleRepository;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_release_notes_repository::MockReleaseNotesRepository;
