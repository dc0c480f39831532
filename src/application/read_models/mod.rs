//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of domain data for rendering.

pub mod report_section;
pub mod support_report_model;
pub mod target_row_view;

pub use report_section::{ReportSection, PLACEHOLDER_PREFIX};
pub use support_report_model::{ReleaseColumnView, SupportReportModel, UnsupportedRowView};
pub use target_row_view::{ColumnView, TargetRowView};
