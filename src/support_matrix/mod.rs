//! Support-matrix domain: release lines, distributions, target selections,
//! lifecycle records and the reconciliation services built on them.
//!
//! Nothing in this module performs I/O. Fetched data arrives through the
//! outbound ports and is handed to these types and services already parsed.
pub mod domain;
pub mod policies;
pub mod services;
