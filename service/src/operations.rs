use chrono::Utc;
use exporter::{write_picklist, XLSX_CONTENT_TYPE};
use report_engine::{
    build_grouped_view, build_pivot, AggregatedRow, CarrierGroup, PivotMatrix, RawReportFilter,
    ReportFilter,
};
use store::{AggregateOrdering, ShipmentStore};

use crate::ReportError;

/// A downloadable spreadsheet payload. Filenames embed the generation
/// timestamp so repeated downloads never collide.
#[derive(Debug, Clone)]
pub struct PicklistDownload {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub filename: String,
}

/// Carrier-grouped pick list for the given filters.
///
/// Empty filters return the globally aggregated grouping; zero matching
/// records return an empty vector.
pub fn generate(
    store: &ShipmentStore,
    filter: &RawReportFilter,
) -> Result<Vec<CarrierGroup>, ReportError> {
    let filter = filter.parse()?;
    let rows = run_aggregation(store, &filter, AggregateOrdering::CarrierThenProduct)?;
    let groups = build_grouped_view(&rows);
    log::info!(
        "generated pick list: {} carriers from {} aggregated rows",
        groups.len(),
        rows.len()
    );
    Ok(groups)
}

/// The pivot matrix for the given filters, as serializable data.
pub fn generate_pivot(
    store: &ShipmentStore,
    filter: &RawReportFilter,
) -> Result<PivotMatrix, ReportError> {
    let filter = filter.parse()?;
    let rows = run_aggregation(store, &filter, AggregateOrdering::ProductThenCarrier)?;
    Ok(build_pivot(&rows))
}

/// The pivot matrix rendered as an XLSX download.
pub fn download(
    store: &ShipmentStore,
    filter: &RawReportFilter,
) -> Result<PicklistDownload, ReportError> {
    let matrix = generate_pivot(store, filter)?;
    let bytes = write_picklist(&matrix).map_err(|e| {
        log::error!("pick-list export failed: {}", e);
        ReportError::Export
    })?;

    let filename = format!("picklist_{}.xlsx", Utc::now().timestamp_millis());
    log::info!("exported {} ({} bytes)", filename, bytes.len());

    Ok(PicklistDownload {
        bytes,
        content_type: XLSX_CONTENT_TYPE,
        filename,
    })
}

fn run_aggregation(
    store: &ShipmentStore,
    filter: &ReportFilter,
    ordering: AggregateOrdering,
) -> Result<Vec<AggregatedRow>, ReportError> {
    store.aggregate(filter, ordering).map_err(|e| {
        log::error!("shipment aggregation failed: {}", e);
        ReportError::Query
    })
}
