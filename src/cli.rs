use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::shared::Result;
use crate::support_matrix::domain::ReleaseLine;

pub const CHECK_USAGE: &str =
    "Invalid args.\nExpected: version [URL or Path, absolute or root location]";

/// Reconcile OS support metadata across release lines and render compatibility reports
#[derive(Parser, Debug)]
#[command(name = "os-support")]
#[command(version)]
#[command(about = "Reconcile OS support metadata across release lines and render compatibility reports", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the multi-release-line OS support report from a markdown template
    Report {
        /// Release-notes base URL (https) or local root directory
        #[arg(short, long)]
        base: Option<String>,

        /// Markdown template containing PLACEHOLDER-* lines (defaults to the built-in template)
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// All release lines to reconcile, e.g. 6,7,8
        #[arg(long, value_delimiter = ',', value_name = "MAJOR")]
        release_lines: Vec<u32>,

        /// Release lines shown as table columns, e.g. 6,8
        #[arg(long, value_delimiter = ',', value_name = "MAJOR")]
        current: Vec<u32>,

        /// Path to config file (defaults to os-support.config.yml in the working directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Check one release line for undocumented support anomalies
    Check {
        /// Major version of the release line, e.g. 8
        version: Option<String>,

        /// Release-notes base URL (https) or local root directory
        base: Option<String>,

        /// Path to config file (defaults to os-support.config.yml in the working directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Exit with code 1 when unexpected anomalies are found
        #[arg(long)]
        fail_on_anomaly: bool,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Parses the positional version of the `check` subcommand.
///
/// Returns `None` when the value is missing or not a major version number;
/// the caller prints [`CHECK_USAGE`] in that case.
pub fn parse_check_version(version: Option<&str>) -> Option<ReleaseLine> {
    version.and_then(|v| v.parse::<ReleaseLine>().ok())
}

/// Converts `--release-lines`/`--current` values, falling back to `fallback`
/// when the flag was not given.
pub fn release_lines_or(values: &[u32], fallback: Vec<ReleaseLine>) -> Vec<ReleaseLine> {
    if values.is_empty() {
        fallback
    } else {
        values.iter().copied().map(ReleaseLine::new).collect()
    }
}

/// Rejects displayed columns that are not part of the reconciled release lines.
pub fn validate_release_lines(all: &[ReleaseLine], current: &[ReleaseLine]) -> Result<()> {
    if let Some(line) = current.iter().find(|line| !all.contains(line)) {
        anyhow::bail!(
            "Release line {} is displayed but not reconciled.\n\n💡 Hint: Add it to --release-lines (or release_lines in the config file).",
            line
        );
    }
    Ok(())
}
