//! Loaders for the published dataset tables.
//!
//! The dashboard consumes CSV exports of the two sheets of the regional
//! workbook ("Published Daily Data" and "Published Hourly Data"). Both share
//! the "Local date" column; the loader parses it, derives the year and month
//! columns, and fails fast on anything it cannot parse.

pub mod loader;

#[cfg(test)]
mod loader_tests;

pub use loader::{load_daily_csv, load_dataset, load_hourly_csv};
