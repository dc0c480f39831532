/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod check_request;
mod check_response;
mod report_request;
mod report_response;

pub use check_request::CheckRequest;
pub use check_response::CheckResponse;
pub use report_request::ReportRequest;
pub use report_response::ReportResponse;
