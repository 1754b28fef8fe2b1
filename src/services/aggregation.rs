//! Hour-by-month mean aggregation for the heatmap view.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Dated, HourlyRecord};

/// Month tick labels, indexed by month number minus one.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Hourly table column selectable for aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourlyField {
    NetGeneration,
    Co2Total,
}

impl HourlyField {
    fn value(self, record: &HourlyRecord) -> f64 {
        match self {
            HourlyField::NetGeneration => record.net_generation,
            HourlyField::Co2Total => record.co2_total,
        }
    }
}

/// Mean of one hourly field per (hour, month) cell.
///
/// `cells` is row-major over `hours` x `months`. A cell is `None` when no
/// row matched that (hour, month) pair; consumers decide how to render the
/// gap, it is never coerced to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeatmapMatrix {
    /// Hour axis, ascending, with the boundary bucket removed
    pub hours: Vec<u32>,
    /// Month axis, ascending, spanning exactly the months present in the
    /// filtered rows
    pub months: Vec<u32>,
    pub cells: Vec<Vec<Option<f64>>>,
}

impl HeatmapMatrix {
    pub fn is_empty(&self) -> bool {
        self.hours.is_empty() || self.months.is_empty()
    }

    /// Mean for one (hour, month) pair, if that cell exists and has data.
    pub fn cell(&self, hour: u32, month: u32) -> Option<f64> {
        let h = self.hours.iter().position(|&x| x == hour)?;
        let m = self.months.iter().position(|&x| x == month)?;
        self.cells[h][m]
    }

    /// Tick labels for the month axis.
    pub fn month_labels(&self) -> Vec<&'static str> {
        self.months
            .iter()
            .map(|&m| MONTH_LABELS[(m as usize - 1) % 12])
            .collect()
    }
}

/// Group the hourly table by (hour, month) and average `field`, optionally
/// restricted to a single year.
///
/// The maximum hour over the *unfiltered* table is a boundary bucket in the
/// source export and is always excluded by value, so the hour axis is
/// identical for every year filter. A filter matching zero rows yields an
/// empty matrix.
pub fn compute_heatmap(
    hourly: &[HourlyRecord],
    field: HourlyField,
    year_filter: Option<i32>,
) -> HeatmapMatrix {
    let overflow_hour = hourly.iter().map(|r| r.hour).max();

    let mut sums: BTreeMap<(u32, u32), (f64, usize)> = BTreeMap::new();
    for record in hourly {
        if Some(record.hour) == overflow_hour {
            continue;
        }
        if year_filter.is_some_and(|year| record.year() != year) {
            continue;
        }
        let entry = sums.entry((record.hour, record.month)).or_insert((0.0, 0));
        entry.0 += field.value(record);
        entry.1 += 1;
    }

    if sums.is_empty() {
        return HeatmapMatrix::default();
    }

    // Hour axis comes from the unfiltered table so its length is stable
    // across year filters; the month axis only spans filtered months.
    let mut hours: Vec<u32> = hourly
        .iter()
        .map(|r| r.hour)
        .filter(|&h| Some(h) != overflow_hour)
        .collect();
    hours.sort_unstable();
    hours.dedup();

    let mut months: Vec<u32> = sums.keys().map(|&(_, m)| m).collect();
    months.sort_unstable();
    months.dedup();

    let cells = hours
        .iter()
        .map(|&hour| {
            months
                .iter()
                .map(|&month| {
                    sums.get(&(hour, month))
                        .map(|&(sum, count)| sum / count as f64)
                })
                .collect()
        })
        .collect();

    HeatmapMatrix {
        hours,
        months,
        cells,
    }
}
