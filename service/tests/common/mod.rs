//! FILENAME: tests/common/mod.rs
//! Shared fixtures for the report operation tests.

use chrono::NaiveDateTime;
use store::{ShipmentRecord, ShipmentStore, DATETIME_FORMAT};

/// Builds an in-memory store seeded with the given lines:
/// (store, courier, product, quantity, shipped_at).
pub fn seeded_store(lines: &[(&str, &str, &str, f64, &str)]) -> ShipmentStore {
    let store = ShipmentStore::open_in_memory().expect("in-memory store");

    for (store_name, courier, product, quantity, shipped_at) in lines {
        store
            .insert(&ShipmentRecord {
                store_name: store_name.to_string(),
                courier_name: courier.to_string(),
                product_name: product.to_string(),
                quantity: *quantity,
                shipped_at: NaiveDateTime::parse_from_str(shipped_at, DATETIME_FORMAT)
                    .expect("fixture datetime"),
            })
            .expect("insert fixture line");
    }

    store
}

/// The three-line scenario used throughout the report tests.
pub fn scenario_store() -> ShipmentStore {
    seeded_store(&[
        ("Central", "Ekart", "Widget", 5.0, "2024-01-10T09:00:00.000"),
        ("Central", "Delhivery", "Widget", 3.0, "2024-01-11T10:00:00.000"),
        ("Central", "Ekart", "Gadget", 2.0, "2024-01-12T11:00:00.000"),
    ])
}
