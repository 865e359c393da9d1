//! FILENAME: core/store/src/query.rs
//! Filter predicate and aggregation ordering.
//!
//! A validated filter becomes a conjunctive WHERE clause plus an ordered
//! parameter list. Values travel only as bound parameters, never spliced
//! into the SQL text.

use chrono::NaiveDate;
use report_engine::ReportFilter;

/// Row ordering of the aggregation result.
///
/// Part of the query contract: the grouped-view builder and the pivot
/// builder each rely on their ordering and never re-sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateOrdering {
    /// (carrier, product) - feeds the grouped pick-list view.
    CarrierThenProduct,
    /// (product, carrier) - feeds the pivot matrix.
    ProductThenCarrier,
}

impl AggregateOrdering {
    pub(crate) fn order_by(self) -> &'static str {
        match self {
            AggregateOrdering::CarrierThenProduct => "courier_name, product_name",
            AggregateOrdering::ProductThenCarrier => "product_name, courier_name",
        }
    }
}

/// A parameterized predicate over the shipment-line table.
#[derive(Debug, Clone, Default)]
pub struct FilterPredicate {
    conditions: Vec<&'static str>,
    params: Vec<String>,
}

impl FilterPredicate {
    /// Builds the predicate for a validated filter. Absent fields add no
    /// condition; an empty filter selects every record.
    pub fn build(filter: &ReportFilter) -> Self {
        let mut predicate = FilterPredicate::default();

        if let Some(store) = &filter.store_name {
            predicate.push("store_name = ?", store.clone());
        }
        if let Some(courier) = &filter.courier_name {
            predicate.push("courier_name = ?", courier.clone());
        }
        if let Some(from) = filter.date_from {
            predicate.push("shipped_at >= ?", day_start(from));
        }
        if let Some(to) = filter.date_to {
            // dateTo is inclusive of the whole calendar day.
            predicate.push("shipped_at <= ?", day_end(to));
        }

        predicate
    }

    fn push(&mut self, condition: &'static str, param: String) {
        self.conditions.push(condition);
        self.params.push(param);
    }

    /// `" WHERE ..."` with a leading space, or empty when unrestricted.
    pub fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.conditions.join(" AND "))
        }
    }

    /// Bound values, in the order their conditions appear in the clause.
    pub fn params(&self) -> &[String] {
        &self.params
    }
}

// Bounds are rendered in the store's TEXT datetime format so string
// comparison in SQLite matches chronological order.

fn day_start(date: NaiveDate) -> String {
    format!("{}T00:00:00.000", date.format("%Y-%m-%d"))
}

fn day_end(date: NaiveDate) -> String {
    format!("{}T23:59:59.999", date.format("%Y-%m-%d"))
}
