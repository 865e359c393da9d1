//! FILENAME: core/exporter/src/lib.rs
//! Pick-list spreadsheet exporter.
//!
//! Renders a pivot matrix into a styled XLSX payload, built entirely in
//! memory. Layout, fills and alignment follow the fixed contract the
//! warehouse operators expect; nothing here touches the filesystem.

mod error;
mod xlsx;

pub use error::ExportError;
pub use xlsx::write_picklist;

/// MIME type of the produced payload.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
