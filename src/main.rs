mod adapters;
mod application;
mod cli;
mod config;
mod ports;
mod shared;
mod support_matrix;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter, StdoutPresenter};
use adapters::outbound::formatters::{CheckFormatter, SupportReportFormatter};
use adapters::outbound::network::{
    CachingLifecycleRepository, EndOfLifeClient, ReleaseNotesClient, ReleaseNotesSource,
};
use application::dto::{CheckRequest, ReportRequest};
use application::use_cases::{CheckExceptionsUseCase, GenerateSupportReportUseCase};
use chrono::NaiveDate;
use cli::{Args, Commands, CHECK_USAGE};
use config::ConfigFile;
use ports::outbound::{OutputPresenter, ReportFormatter, TemplateReader};
use shared::error::ExitCode;
use shared::Result;
use std::path::{Path, PathBuf};
use std::process;

const DEFAULT_TEMPLATE: &str = include_str!("../templates/os-support-template.md");

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse_args();

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let today = chrono::Local::now().date_naive();

    match args.command {
        Commands::Report {
            base,
            template,
            output,
            release_lines,
            current,
            config: config_path,
            quiet,
        } => {
            let config = config::resolve_config(config_path.as_deref(), Path::new("."))?;
            let options = ReportOptions {
                base,
                template,
                output,
                release_lines,
                current,
                quiet,
            };
            run_report(&config, options, today).await
        }
        Commands::Check {
            version,
            base,
            config: config_path,
            fail_on_anomaly,
        } => {
            // Invalid input exits before any configuration or network work
            let Some(release_line) = cli::parse_check_version(version.as_deref()) else {
                eprintln!("{}", CHECK_USAGE);
                return Ok(ExitCode::InvalidArguments);
            };
            let config = config::resolve_config(config_path.as_deref(), Path::new("."))?;
            run_check(&config, release_line, base, fail_on_anomaly, today).await
        }
    }
}

struct ReportOptions {
    base: Option<String>,
    template: Option<PathBuf>,
    output: Option<PathBuf>,
    release_lines: Vec<u32>,
    current: Vec<u32>,
    quiet: bool,
}

async fn run_report(config: &ConfigFile, options: ReportOptions, today: NaiveDate) -> Result<ExitCode> {
    let release_lines = cli::release_lines_or(&options.release_lines, config.release_lines());
    let current_release_lines = cli::release_lines_or(&options.current, config.current_release_lines());
    cli::validate_release_lines(&release_lines, &current_release_lines)?;

    // Read the template first so a bad path fails before any fetch
    let template = match options.template {
        Some(path) => FileSystemReader::new().read_template(&path)?,
        None => DEFAULT_TEMPLATE.to_string(),
    };

    // Create adapters (Dependency Injection)
    let release_notes = ReleaseNotesClient::new(ReleaseNotesSource::resolve(options.base.as_deref()))?;
    let lifecycle = CachingLifecycleRepository::new(lifecycle_client(config)?);
    let progress_reporter = if options.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let use_case = GenerateSupportReportUseCase::new(release_notes, lifecycle, progress_reporter);
    let request = ReportRequest::new(
        release_lines,
        current_release_lines,
        config.platform_name(),
        config.release_notes_link(),
        today,
    );
    let response = use_case.execute(request).await?;

    let formatted_output = SupportReportFormatter::new().format(&response.model, &template)?;

    let presenter: Box<dyn OutputPresenter> = match options.output {
        Some(output_path) => Box::new(FileSystemWriter::new(output_path)),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&formatted_output)?;

    Ok(ExitCode::Success)
}

async fn run_check(
    config: &ConfigFile,
    release_line: support_matrix::domain::ReleaseLine,
    base: Option<String>,
    fail_on_anomaly: bool,
    today: NaiveDate,
) -> Result<ExitCode> {
    let release_notes = ReleaseNotesClient::new(ReleaseNotesSource::resolve(base.as_deref()))?;
    let lifecycle = CachingLifecycleRepository::new(lifecycle_client(config)?);
    let use_case = CheckExceptionsUseCase::new(release_notes, lifecycle, StderrProgressReporter::new());

    let mut request = CheckRequest::new(release_line, today).with_exceptions(config.exception_table());
    if let Some(days) = config.eol_soon_days {
        request = request.with_eol_soon_days(days);
    }

    let response = use_case.execute(request).await?;

    let output = CheckFormatter::new(config.platform_name()).format(&response);
    StdoutPresenter::new().present(&output)?;

    if fail_on_anomaly && response.has_anomalies() {
        return Ok(ExitCode::AnomaliesDetected);
    }
    Ok(ExitCode::Success)
}

fn lifecycle_client(config: &ConfigFile) -> Result<EndOfLifeClient> {
    match config.lifecycle_api_url.as_deref() {
        Some(api_url) => EndOfLifeClient::with_api_url(api_url),
        None => EndOfLifeClient::new(),
    }
}
