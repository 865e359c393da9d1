use report_engine::FilterError;
use thiserror::Error;

/// Caller-facing failure taxonomy.
///
/// `InvalidFilter` keeps its detail: the caller named the bad value and
/// gets told which field it was. `Query` and `Export` carry none - the
/// underlying error is logged in full at the operation boundary and the
/// message below is all a caller may see.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error(transparent)]
    InvalidFilter(#[from] FilterError),

    #[error("report generation failed")]
    Query,

    #[error("spreadsheet export failed")]
    Export,
}
