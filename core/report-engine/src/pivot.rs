//! FILENAME: core/report-engine/src/pivot.rs
//! Pivot builder - cross-tabulates aggregated rows into a dense
//! product x carrier matrix with row, column and grand totals.
//!
//! Algorithm:
//! 1. Derive the distinct carrier and product sets; sort lexicographically
//! 2. Build a product -> (carrier -> quantity) lookup from present pairs
//! 3. Emit one row per product, accumulating row and column totals
//! 4. Close with the synthetic total row

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::AggregatedRow;

// ============================================================================
// MATRIX TYPES
// ============================================================================

/// A single matrix cell.
///
/// `Blank` marks a pair that is absent or non-positive - a display marker,
/// never the number 0. Arithmetic reads a blank as zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PivotCell {
    Blank,
    Value(f64),
}

impl PivotCell {
    /// The cell's numeric contribution, with `Blank` read as zero.
    pub fn as_f64(&self) -> f64 {
        match self {
            PivotCell::Blank => 0.0,
            PivotCell::Value(v) => *v,
        }
    }
}

/// One product row: cells aligned with `PivotMatrix::carriers`, closed by
/// the row total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotRow {
    pub product: String,
    pub cells: Vec<PivotCell>,
    pub total: f64,
}

/// The dense product x carrier matrix.
///
/// Rows are sorted by product name, columns by carrier name, both
/// ascending, so the same records always render the same sheet. Column
/// totals are always numeric - the total row never goes blank.
///
/// Invariants: each row total equals the sum of its cells (blank = 0),
/// each column total equals the sum of that column's cells, and the grand
/// total equals both the sum of row totals and the sum of column totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotMatrix {
    pub carriers: Vec<String>,
    pub rows: Vec<PivotRow>,
    pub column_totals: Vec<f64>,
    pub grand_total: f64,
}

impl PivotMatrix {
    /// Rendered width: product column + one per carrier + grand total.
    pub fn column_count(&self) -> usize {
        1 + self.carriers.len() + 1
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builds the pivot matrix from aggregated rows.
///
/// Membership in the row/column sets comes from presence in the aggregated
/// output alone: a product whose sums are all non-positive still gets a row
/// (all blanks, total 0), and a carrier with a non-positive sum keeps its
/// column. Totals accumulate the displayed cell values, so every total is
/// reconstructible from the cells above it.
pub fn build_pivot(rows: &[AggregatedRow]) -> PivotMatrix {
    // Hash-keyed accumulation over present pairs only; absent pairs are
    // implicit zero.
    let mut lookup: FxHashMap<&str, FxHashMap<&str, f64>> = FxHashMap::default();
    let mut carrier_set: FxHashSet<&str> = FxHashSet::default();

    for row in rows {
        lookup
            .entry(row.product.as_str())
            .or_default()
            .insert(row.carrier.as_str(), row.quantity);
        carrier_set.insert(row.carrier.as_str());
    }

    let mut products: Vec<&str> = lookup.keys().copied().collect();
    products.sort_unstable();
    let mut carriers: Vec<&str> = carrier_set.into_iter().collect();
    carriers.sort_unstable();

    let mut column_totals = vec![0.0_f64; carriers.len()];
    let mut grand_total = 0.0_f64;
    let mut matrix_rows = Vec::with_capacity(products.len());

    for product in &products {
        let by_carrier = &lookup[product];
        let mut cells = Vec::with_capacity(carriers.len());
        let mut row_total = 0.0_f64;

        for (col, carrier) in carriers.iter().enumerate() {
            let quantity = by_carrier.get(carrier).copied().unwrap_or(0.0);
            let cell = if quantity > 0.0 {
                PivotCell::Value(quantity)
            } else {
                PivotCell::Blank
            };

            row_total += cell.as_f64();
            column_totals[col] += cell.as_f64();
            cells.push(cell);
        }

        grand_total += row_total;
        matrix_rows.push(PivotRow {
            product: (*product).to_string(),
            cells,
            total: row_total,
        });
    }

    PivotMatrix {
        carriers: carriers.into_iter().map(str::to_string).collect(),
        rows: matrix_rows,
        column_totals,
        grand_total,
    }
}
