/// Use cases module containing application business logic orchestration
mod check_exceptions;
mod generate_support_report;

pub use check_exceptions::CheckExceptionsUseCase;
pub use generate_support_report::GenerateSupportReportUseCase;

/// Upper bound of concurrent lifecycle lookups
pub(crate) const LIFECYCLE_FETCH_CONCURRENCY: usize = 8;

/// Diagnostic for a lookup the lifecycle provider could not answer
pub(crate) fn missing_lifecycle_message(product: &str, cycle: Option<&str>) -> String {
    match cycle {
        Some(cycle) => format!(
            "⚠️  Warning: No data found at endoflife.date for: {} {}",
            product, cycle
        ),
        None => format!(
            "⚠️  Warning: No data found at endoflife.date for: {}",
            product
        ),
    }
}
