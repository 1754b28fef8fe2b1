//! Error types for dataset loading and filtering.

use thiserror::Error;

/// Result type for dataset loading operations.
pub type LoadResult<T> = Result<T, DataFormatError>;

/// Fatal load-time error: the source tables do not match the expected schema.
///
/// Raised while reading the daily or hourly table. The loader fails fast on
/// the first malformed row instead of coercing bad cells to null, so a
/// partially corrupt export never reaches the aggregation layer.
#[derive(Debug, Error)]
pub enum DataFormatError {
    /// A required column is absent from the table header.
    #[error("{table} table: missing required column '{column}'")]
    MissingColumn {
        table: &'static str,
        column: String,
    },

    /// A date cell could not be parsed.
    #[error("{table} table, row {row}: unparseable date '{value}'")]
    BadDate {
        table: &'static str,
        row: usize,
        value: String,
    },

    /// A numeric cell could not be parsed.
    #[error("{table} table, row {row}: unparseable value '{value}' in column '{column}'")]
    BadNumber {
        table: &'static str,
        row: usize,
        column: String,
        value: String,
    },

    /// The underlying file could not be opened.
    #[error("{table} table: failed to open '{path}'")]
    Io {
        table: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader failed (malformed quoting, uneven row length, ...).
    #[error("{table} table: failed to read CSV")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },
}

/// Recoverable runtime error: a year selection outside the catalog.
///
/// The year selector in the UI only offers catalog members, but the engine
/// guards the boundary itself. Callers are expected to clamp back to a valid
/// year rather than propagate this to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("year {year} is not present in the dataset (available: {available:?})")]
pub struct InvalidYearError {
    pub year: i32,
    pub available: Vec<i32>,
}
