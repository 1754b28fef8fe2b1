//! Year catalog backing the dashboard's year selector.

use serde::{Deserialize, Serialize};

/// Distinct years present in the daily table, in first-seen order.
///
/// First-seen order matches the order of the source export (the selector in
/// the dashboard lists years as they appear, not sorted). The first entry is
/// the session default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCatalog {
    years: Vec<i32>,
}

impl YearCatalog {
    /// Build a catalog from a stream of year values, deduplicating while
    /// preserving first-seen order.
    pub fn from_years(years: impl IntoIterator<Item = i32>) -> Self {
        let mut seen = Vec::new();
        for year in years {
            if !seen.contains(&year) {
                seen.push(year);
            }
        }
        Self { years: seen }
    }

    /// Whether `year` is a valid selection.
    pub fn contains(&self, year: i32) -> bool {
        self.years.contains(&year)
    }

    /// The initial selection for a new session, if the catalog is non-empty.
    pub fn default_year(&self) -> Option<i32> {
        self.years.first().copied()
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}
