//! Dataset row types for the daily and hourly tables.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Anything carrying a calendar year derived from its local date.
///
/// Implemented by both table row types so year filtering works uniformly
/// over either table.
pub trait Dated {
    fn year(&self) -> i32;
}

/// The fuel sources the dashboard breaks CO2 emissions down by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmissionSource {
    Coal,
    NaturalGas,
    Petroleum,
}

impl EmissionSource {
    pub const ALL: [EmissionSource; 3] = [
        EmissionSource::Coal,
        EmissionSource::NaturalGas,
        EmissionSource::Petroleum,
    ];

    /// Display name used in legends.
    pub fn label(self) -> &'static str {
        match self {
            EmissionSource::Coal => "Coal",
            EmissionSource::NaturalGas => "Natural Gas",
            EmissionSource::Petroleum => "Petroleum",
        }
    }

    /// Column header in the daily table export.
    pub fn column(self) -> &'static str {
        match self {
            EmissionSource::Coal => "CO2 Emissions Generated by Coal",
            EmissionSource::NaturalGas => "CO2 Emissions Generated by Natural Gas",
            EmissionSource::Petroleum => "CO2 Emissions Generated by Petroleum",
        }
    }
}

/// One row of the daily table: a calendar day of regional totals.
///
/// Invariant: `year == local_date.year()`. Rows are immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Calendar day in the source's local reporting timezone
    pub local_date: NaiveDate,
    /// Year derived from `local_date`
    pub year: i32,
    /// Net generation in megawatt-hours (source column "D")
    pub net_generation: f64,
    /// Total CO2 emissions in metric tons
    pub co2_total: f64,
    /// CO2 emissions per fuel source, indexed by [`EmissionSource::ALL`]
    pub co2_by_source: [f64; 3],
}

impl DailyRecord {
    pub fn new(
        local_date: NaiveDate,
        net_generation: f64,
        co2_total: f64,
        co2_by_source: [f64; 3],
    ) -> Self {
        Self {
            local_date,
            year: local_date.year(),
            net_generation,
            co2_total,
            co2_by_source,
        }
    }

    /// CO2 emissions attributed to a single fuel source.
    pub fn co2_for(&self, source: EmissionSource) -> f64 {
        self.co2_by_source[source as usize]
    }
}

impl Dated for DailyRecord {
    fn year(&self) -> i32 {
        self.year
    }
}

/// One row of the hourly table: a single hour of a single day.
///
/// Invariant: `month == local_date.month()`. The hour axis of the source
/// export carries a boundary bucket at its maximum value; the loader keeps
/// it and aggregation excludes it by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyRecord {
    /// Calendar day in the source's local reporting timezone
    pub local_date: NaiveDate,
    /// Hour-of-day bucket as published by the source
    pub hour: u32,
    /// Month derived from `local_date`
    pub month: u32,
    /// Net generation in megawatt-hours
    pub net_generation: f64,
    /// Total CO2 emissions in metric tons
    pub co2_total: f64,
}

impl HourlyRecord {
    pub fn new(local_date: NaiveDate, hour: u32, net_generation: f64, co2_total: f64) -> Self {
        Self {
            local_date,
            hour,
            month: local_date.month(),
            net_generation,
            co2_total,
        }
    }
}

impl Dated for HourlyRecord {
    fn year(&self) -> i32 {
        self.local_date.year()
    }
}
