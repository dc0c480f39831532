/// Formatter adapters for the rendered report and the check output
mod check_formatter;
mod link_registry;
mod markdown_table;
mod support_report_formatter;

pub use check_formatter::CheckFormatter;
pub use link_registry::LinkRegistry;
pub use markdown_table::MarkdownTable;
pub use support_report_formatter::SupportReportFormatter;
