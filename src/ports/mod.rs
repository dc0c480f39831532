/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) describe the infrastructure the
/// application core talks to: release notes, lifecycle data, templates,
/// the console and the output destination.
pub mod outbound;
