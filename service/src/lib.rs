//! Report operations for the warehouse pick-list subsystem.
//!
//! This crate is the boundary a transport layer calls: filter validation,
//! the aggregation query, report construction and export, with failures
//! translated into the caller-facing taxonomy before they leave.

mod error;
mod operations;

pub use error::ReportError;
pub use operations::{download, generate, generate_pivot, PicklistDownload};
