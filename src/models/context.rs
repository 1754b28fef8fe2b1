//! Read-only data context shared by the aggregation and view layers.

use super::catalog::YearCatalog;
use super::record::{DailyRecord, HourlyRecord};

/// The loaded dataset: both tables plus the derived year catalog.
///
/// Constructed once at startup and passed explicitly into every engine and
/// selector call. Immutable after construction, so it can be shared across
/// threads behind an `Arc` without locking.
#[derive(Debug, Clone, Default)]
pub struct DataContext {
    pub daily: Vec<DailyRecord>,
    pub hourly: Vec<HourlyRecord>,
    pub years: YearCatalog,
}

impl DataContext {
    /// Bundle the two tables, deriving the year catalog from the daily rows.
    pub fn new(daily: Vec<DailyRecord>, hourly: Vec<HourlyRecord>) -> Self {
        let years = YearCatalog::from_years(daily.iter().map(|r| r.year));
        Self {
            daily,
            hourly,
            years,
        }
    }
}
