use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// CI jobs that run the anomaly checker rely on these to tell a clean run
/// apart from a run that found undocumented discrepancies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - report written, or no unexpected anomalies
    Success = 0,
    /// Anomalies were found and `--fail-on-anomaly` was requested
    AnomaliesDetected = 1,
    /// Invalid command-line arguments
    InvalidArguments = 2,
    /// Application error (missing release data, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::AnomaliesDetected => write!(f, "Anomalies Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors surfaced to the user.
#[derive(Debug, Error)]
pub enum SupportError {
    #[error("Release data for {release_line} is unavailable: {location}\nDetails: {details}\n\n💡 Hint: Check the base URL or path; it must contain <version>/supported-os.json and <version>/releases.json")]
    ReleaseDataUnavailable {
        release_line: String,
        location: String,
        details: String,
    },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid template path: {path}\nReason: {reason}\n\n💡 Hint: Pass an existing markdown template with --template")]
    InvalidTemplatePath { path: PathBuf, reason: String },

    /// Validation error for configuration and requests
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
