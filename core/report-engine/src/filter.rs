//! FILENAME: core/report-engine/src/filter.rs
//! Report filters - the caller-facing schema and its validation.
//!
//! Filters arrive as optional strings (JSON), are validated into typed
//! values before any query runs, and compose conjunctively. An absent
//! field imposes no constraint; an empty filter selects every record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Filter values as supplied by the caller.
///
/// `dateFrom`/`dateTo` are ISO calendar dates ("2024-01-15"); `dateTo` is
/// inclusive through the end of that day. Name filters are exact matches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawReportFilter {
    pub store_name: Option<String>,
    pub courier_name: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

/// Rejection of a malformed filter value, naming the offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("invalid {field} date: {value}")]
    InvalidDate { field: &'static str, value: String },
}

/// A validated filter.
///
/// Dates stay calendar dates here; the end-of-day expansion of `date_to`
/// is applied where the comparison bound is built, in the store's
/// predicate builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub store_name: Option<String>,
    pub courier_name: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl RawReportFilter {
    /// Validates the raw values, rejecting unparseable dates before any
    /// query work happens.
    pub fn parse(&self) -> Result<ReportFilter, FilterError> {
        Ok(ReportFilter {
            store_name: self.store_name.clone(),
            courier_name: self.courier_name.clone(),
            date_from: parse_date("dateFrom", self.date_from.as_deref())?,
            date_to: parse_date("dateTo", self.date_to.as_deref())?,
        })
    }
}

impl ReportFilter {
    /// True when no field constrains the record set.
    pub fn is_unrestricted(&self) -> bool {
        self.store_name.is_none()
            && self.courier_name.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }
}

fn parse_date(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<NaiveDate>, FilterError> {
    match value {
        None => Ok(None),
        Some(s) => s.parse::<NaiveDate>().map(Some).map_err(|_| FilterError::InvalidDate {
            field,
            value: s.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_is_unrestricted() {
        let filter = RawReportFilter::default().parse().unwrap();
        assert!(filter.is_unrestricted());
    }

    #[test]
    fn test_parse_all_fields() {
        let raw = RawReportFilter {
            store_name: Some("Central".to_string()),
            courier_name: Some("Ekart".to_string()),
            date_from: Some("2024-01-01".to_string()),
            date_to: Some("2024-01-15".to_string()),
        };

        let filter = raw.parse().unwrap();
        assert_eq!(filter.store_name.as_deref(), Some("Central"));
        assert_eq!(filter.courier_name.as_deref(), Some("Ekart"));
        assert_eq!(filter.date_from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(filter.date_to, NaiveDate::from_ymd_opt(2024, 1, 15));
        assert!(!filter.is_unrestricted());
    }

    #[test]
    fn test_invalid_date_names_the_field() {
        let raw = RawReportFilter {
            date_from: Some("15/01/2024".to_string()),
            ..Default::default()
        };

        let err = raw.parse().unwrap_err();
        assert_eq!(
            err,
            FilterError::InvalidDate {
                field: "dateFrom",
                value: "15/01/2024".to_string(),
            }
        );
        assert!(err.to_string().contains("dateFrom"));
    }

    #[test]
    fn test_invalid_date_to_rejected() {
        let raw = RawReportFilter {
            date_to: Some("not-a-date".to_string()),
            ..Default::default()
        };

        let err = raw.parse().unwrap_err();
        assert!(err.to_string().contains("dateTo"));
    }

    #[test]
    fn test_deserializes_camel_case() {
        let raw: RawReportFilter = serde_json::from_str(
            r#"{"storeName": "Central", "courierName": "Ekart", "dateTo": "2024-01-15"}"#,
        )
        .unwrap();

        assert_eq!(raw.store_name.as_deref(), Some("Central"));
        assert_eq!(raw.courier_name.as_deref(), Some("Ekart"));
        assert_eq!(raw.date_to.as_deref(), Some("2024-01-15"));
        assert_eq!(raw.date_from, None);
    }
}
