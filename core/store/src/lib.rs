//! FILENAME: core/store/src/lib.rs
//! Shipment record store.
//!
//! SQLite-backed storage for shipment lines. The reporting subsystem
//! consumes it through a single read-only aggregation query with
//! snapshot consistency per call; the write path exists for seeding and
//! tests. Aggregation is the store's job so the grouped sum runs where
//! the records live.

mod error;
mod query;

pub use error::StoreError;
pub use query::{AggregateOrdering, FilterPredicate};

use chrono::NaiveDateTime;
use rusqlite::{params, Connection};
use std::path::Path;

use report_engine::{AggregatedRow, ReportFilter};

/// Storage format for shipment timestamps. Values are written and bound
/// through this one format so TEXT comparison matches chronological order.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// One shipment line as recorded at packing time.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentRecord {
    pub store_name: String,
    pub courier_name: String,
    pub product_name: String,
    pub quantity: f64,
    pub shipped_at: NaiveDateTime,
}

/// Handle to the shipment-line table.
pub struct ShipmentStore {
    conn: Connection,
}

impl ShipmentStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        Self::init(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS shipment_lines (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                store_name TEXT NOT NULL,
                courier_name TEXT NOT NULL,
                product_name TEXT NOT NULL,
                quantity REAL NOT NULL,
                shipped_at TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_shipment_lines_shipped_at
                ON shipment_lines (shipped_at);",
        )?;
        Ok(ShipmentStore { conn })
    }

    /// Records one shipment line.
    pub fn insert(&self, record: &ShipmentRecord) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO shipment_lines
                (store_name, courier_name, product_name, quantity, shipped_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record.store_name,
                record.courier_name,
                record.product_name,
                record.quantity,
                record.shipped_at.format(DATETIME_FORMAT).to_string(),
            ],
        )?;
        Ok(())
    }

    /// Grouped quantity sums over the filtered record set.
    ///
    /// One row per (carrier, product) pair present in the filtered records,
    /// in the requested ordering. Zero matching records yields an empty
    /// vector, not an error.
    pub fn aggregate(
        &self,
        filter: &ReportFilter,
        ordering: AggregateOrdering,
    ) -> Result<Vec<AggregatedRow>, StoreError> {
        let predicate = FilterPredicate::build(filter);
        let sql = format!(
            "SELECT courier_name, product_name, SUM(quantity)
             FROM shipment_lines{}
             GROUP BY courier_name, product_name
             ORDER BY {}",
            predicate.where_clause(),
            ordering.order_by(),
        );
        log::debug!("aggregate: {} bound params", predicate.params().len());

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(predicate.params()), |row| {
            Ok(AggregatedRow {
                carrier: row.get(0)?,
                product: row.get(1)?,
                quantity: row.get(2)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
    }
}
