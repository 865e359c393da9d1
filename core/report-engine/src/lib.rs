//! FILENAME: core/report-engine/src/lib.rs
//! Report construction core for the warehouse pick-list subsystem.
//!
//! This crate holds the pure derived-data builders, separate from the
//! record store and the spreadsheet exporter. It performs no IO: rows go
//! in, report shapes come out, and nothing here can fail on "no data".
//!
//! Layers:
//! - `filter`: Caller-facing filter schema and its validation
//! - `grouped`: Carrier-grouped pick-list view (what operators walk with)
//! - `pivot`: Product x carrier matrix with totals (what the export renders)

pub mod filter;
pub mod grouped;
pub mod pivot;

pub use filter::{FilterError, RawReportFilter, ReportFilter};
pub use grouped::{build_grouped_view, CarrierGroup, ProductQuantity};
pub use pivot::{build_pivot, PivotCell, PivotMatrix, PivotRow};

use serde::{Deserialize, Serialize};

/// One aggregated fact: the summed quantity for a (carrier, product) pair.
///
/// Produced by the store's grouped-sum query, unique per pair, and consumed
/// within a single report request. Quantities are `f64` so fractional and
/// large sums survive aggregation unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedRow {
    pub carrier: String,
    pub product: String,
    pub quantity: f64,
}

impl AggregatedRow {
    pub fn new(carrier: impl Into<String>, product: impl Into<String>, quantity: f64) -> Self {
        AggregatedRow {
            carrier: carrier.into(),
            product: product.into(),
            quantity,
        }
    }
}
