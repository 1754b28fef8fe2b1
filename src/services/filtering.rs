//! Year filtering over the dataset tables.

use crate::error::InvalidYearError;
use crate::models::{Dated, YearCatalog};

/// Rows whose derived year equals `year`, original order preserved.
///
/// The catalog check is the engine-side guard: the UI only offers catalog
/// members in its selector, but the engine rejects anything else on its own
/// since it is the trust boundary for correctness.
pub fn filter_by_year<'a, T: Dated>(
    records: &'a [T],
    year: i32,
    catalog: &YearCatalog,
) -> Result<Vec<&'a T>, InvalidYearError> {
    if !catalog.contains(year) {
        return Err(InvalidYearError {
            year,
            available: catalog.years().to_vec(),
        });
    }
    Ok(records.iter().filter(|r| r.year() == year).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DailyRecord;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn daily(year: i32, month: u32, day: u32, ng: f64) -> DailyRecord {
        DailyRecord::new(
            NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            ng,
            ng / 2.0,
            [0.0; 3],
        )
    }

    #[test]
    fn test_filter_returns_only_matching_year() {
        let table = vec![
            daily(2019, 1, 1, 10.0),
            daily(2020, 1, 1, 20.0),
            daily(2019, 1, 2, 30.0),
        ];
        let catalog = YearCatalog::from_years(table.iter().map(|r| r.year));

        let subset = filter_by_year(&table, 2019, &catalog).unwrap();
        assert_eq!(subset.len(), 2);
        assert!(subset.iter().all(|r| r.year == 2019));
        // original order preserved
        assert_eq!(subset[0].net_generation, 10.0);
        assert_eq!(subset[1].net_generation, 30.0);
    }

    #[test]
    fn test_filter_rejects_year_outside_catalog() {
        let table: Vec<DailyRecord> = (2018..=2023).map(|y| daily(y, 6, 15, 1.0)).collect();
        let catalog = YearCatalog::from_years(table.iter().map(|r| r.year));

        let err = filter_by_year(&table, 1899, &catalog).unwrap_err();
        assert_eq!(err.year, 1899);
        assert_eq!(err.available, (2018..=2023).collect::<Vec<_>>());
    }

    proptest! {
        // The per-year subsets partition the table: each subset contains only
        // its year and their concatenation in catalog order re-covers every
        // row, order preserved within each year.
        #[test]
        fn prop_year_subsets_partition_table(
            years in proptest::collection::vec(2018i32..2024, 1..60)
        ) {
            let table: Vec<DailyRecord> = years
                .iter()
                .enumerate()
                .map(|(i, &y)| daily(y, 1 + (i as u32 % 12), 1 + (i as u32 % 28), i as f64))
                .collect();
            let catalog = YearCatalog::from_years(table.iter().map(|r| r.year));

            let mut total = 0usize;
            for &year in catalog.years() {
                let subset = filter_by_year(&table, year, &catalog).unwrap();
                prop_assert!(subset.iter().all(|r| r.year == year));
                // order within the subset follows table order
                let positions: Vec<usize> = subset
                    .iter()
                    .map(|r| table.iter().position(|t| std::ptr::eq(t, *r)).unwrap())
                    .collect();
                prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
                total += subset.len();
            }
            prop_assert_eq!(total, table.len());
        }
    }
}
