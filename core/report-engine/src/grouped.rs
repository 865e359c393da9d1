//! FILENAME: core/report-engine/src/grouped.rs
//! Carrier-grouped pick-list view.
//!
//! Reshapes aggregated rows into one entry per carrier, in first-seen
//! order, each listing the products routed through that carrier. The
//! aggregator feeds this builder rows ordered by (carrier, product), so
//! the per-carrier product lists arrive already ordered.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::AggregatedRow;

/// One product line within a carrier's pick list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductQuantity {
    pub product: String,
    pub quantity: f64,
}

/// One pick-list entry: a carrier and everything shipping through it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierGroup {
    pub carrier: String,
    pub products: Vec<ProductQuantity>,
}

/// Groups aggregated rows by carrier.
///
/// Single pass with a hash-keyed index from carrier to its entry, so
/// construction stays O(n) whatever the carrier cardinality. Carrier order
/// is first-seen; per-carrier product order is the input order. No rows
/// yields an empty vector.
pub fn build_grouped_view(rows: &[AggregatedRow]) -> Vec<CarrierGroup> {
    let mut groups: Vec<CarrierGroup> = Vec::new();
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();

    for row in rows {
        let slot = match index.get(row.carrier.as_str()) {
            Some(&slot) => slot,
            None => {
                index.insert(row.carrier.as_str(), groups.len());
                groups.push(CarrierGroup {
                    carrier: row.carrier.clone(),
                    products: Vec::new(),
                });
                groups.len() - 1
            }
        };

        groups[slot].products.push(ProductQuantity {
            product: row.product.clone(),
            quantity: row.quantity,
        });
    }

    groups
}
