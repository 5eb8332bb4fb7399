//! Report error types.

use thiserror::Error;

/// Errors raised when selecting what to report on.
///
/// Statement derivation itself never fails; these cover period selection
/// by callers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// Requested period is neither a data period nor the combined view.
    #[error("Reporting period not found: {0}")]
    PeriodNotFound(String),

    /// No classified accounts were supplied.
    #[error("No data found for the specified criteria")]
    NoDataFound,
}
