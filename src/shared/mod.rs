//! Shared utilities used by every layer: the result alias, error types and
//! file-safety checks.
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
