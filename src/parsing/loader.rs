//! CSV loaders for the daily and hourly tables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;
use log::info;

use crate::error::{DataFormatError, LoadResult};
use crate::models::{DailyRecord, DataContext, EmissionSource, HourlyRecord};

/// Date column shared by both tables.
pub const DATE_COLUMN: &str = "Local date";
/// Net generation column of the daily table.
pub const DAILY_NET_GENERATION_COLUMN: &str = "D";
/// Net generation column of the hourly table.
pub const HOURLY_NET_GENERATION_COLUMN: &str = "NG";
/// Total CO2 column, present in both tables.
pub const CO2_TOTAL_COLUMN: &str = "CO2 Emissions Generated";
/// Hour bucket column of the hourly table.
pub const HOUR_COLUMN: &str = "Hour";

const DAILY_TABLE: &str = "daily";
const HOURLY_TABLE: &str = "hourly";

// The workbook export writes dates ISO or US-style depending on locale.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Load both tables from disk and bundle them into a [`DataContext`].
///
/// Any schema or parse problem aborts the whole load; no partial dataset is
/// ever returned.
pub fn load_dataset(daily_path: &Path, hourly_path: &Path) -> LoadResult<DataContext> {
    let daily_file = File::open(daily_path).map_err(|e| DataFormatError::Io {
        table: DAILY_TABLE,
        path: daily_path.display().to_string(),
        source: e,
    })?;
    let daily = load_daily_csv(daily_file)?;

    let hourly_file = File::open(hourly_path).map_err(|e| DataFormatError::Io {
        table: HOURLY_TABLE,
        path: hourly_path.display().to_string(),
        source: e,
    })?;
    let hourly = load_hourly_csv(hourly_file)?;

    let context = DataContext::new(daily, hourly);
    info!(
        "loaded daily table: {} rows, years {:?}",
        context.daily.len(),
        context.years.years()
    );
    info!("loaded hourly table: {} rows", context.hourly.len());

    Ok(context)
}

/// Parse the daily table from any reader.
pub fn load_daily_csv<R: Read>(reader: R) -> LoadResult<Vec<DailyRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = read_headers(&mut csv_reader, DAILY_TABLE)?;

    let date_idx = column_index(&headers, DAILY_TABLE, DATE_COLUMN)?;
    let net_idx = column_index(&headers, DAILY_TABLE, DAILY_NET_GENERATION_COLUMN)?;
    let co2_idx = column_index(&headers, DAILY_TABLE, CO2_TOTAL_COLUMN)?;
    let mut source_idx = [0usize; 3];
    for (slot, source) in source_idx.iter_mut().zip(EmissionSource::ALL) {
        *slot = column_index(&headers, DAILY_TABLE, source.column())?;
    }

    let mut rows = Vec::new();
    for (i, result) in csv_reader.records().enumerate() {
        // 1-based line number; the header occupies line 1.
        let row = i + 2;
        let record = result.map_err(|e| DataFormatError::Csv {
            table: DAILY_TABLE,
            source: e,
        })?;

        let local_date = parse_date(DAILY_TABLE, row, field(&record, date_idx))?;
        let net_generation = parse_number(
            DAILY_TABLE,
            row,
            DAILY_NET_GENERATION_COLUMN,
            field(&record, net_idx),
        )?;
        let co2_total = parse_number(DAILY_TABLE, row, CO2_TOTAL_COLUMN, field(&record, co2_idx))?;

        let mut co2_by_source = [0.0f64; 3];
        for (value, (idx, source)) in co2_by_source
            .iter_mut()
            .zip(source_idx.iter().zip(EmissionSource::ALL))
        {
            *value = parse_number(DAILY_TABLE, row, source.column(), field(&record, *idx))?;
        }

        rows.push(DailyRecord::new(
            local_date,
            net_generation,
            co2_total,
            co2_by_source,
        ));
    }

    Ok(rows)
}

/// Parse the hourly table from any reader.
pub fn load_hourly_csv<R: Read>(reader: R) -> LoadResult<Vec<HourlyRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = read_headers(&mut csv_reader, HOURLY_TABLE)?;

    let date_idx = column_index(&headers, HOURLY_TABLE, DATE_COLUMN)?;
    let hour_idx = column_index(&headers, HOURLY_TABLE, HOUR_COLUMN)?;
    let net_idx = column_index(&headers, HOURLY_TABLE, HOURLY_NET_GENERATION_COLUMN)?;
    let co2_idx = column_index(&headers, HOURLY_TABLE, CO2_TOTAL_COLUMN)?;

    let mut rows = Vec::new();
    for (i, result) in csv_reader.records().enumerate() {
        let row = i + 2;
        let record = result.map_err(|e| DataFormatError::Csv {
            table: HOURLY_TABLE,
            source: e,
        })?;

        let local_date = parse_date(HOURLY_TABLE, row, field(&record, date_idx))?;
        let hour = parse_hour(HOURLY_TABLE, row, field(&record, hour_idx))?;
        let net_generation = parse_number(
            HOURLY_TABLE,
            row,
            HOURLY_NET_GENERATION_COLUMN,
            field(&record, net_idx),
        )?;
        let co2_total = parse_number(HOURLY_TABLE, row, CO2_TOTAL_COLUMN, field(&record, co2_idx))?;

        rows.push(HourlyRecord::new(local_date, hour, net_generation, co2_total));
    }

    Ok(rows)
}

fn read_headers<R: Read>(
    reader: &mut csv::Reader<R>,
    table: &'static str,
) -> LoadResult<StringRecord> {
    reader
        .headers()
        .map(|h| h.clone())
        .map_err(|e| DataFormatError::Csv { table, source: e })
}

fn column_index(
    headers: &StringRecord,
    table: &'static str,
    column: &str,
) -> LoadResult<usize> {
    headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| DataFormatError::MissingColumn {
            table,
            column: column.to_string(),
        })
}

fn field<'r>(record: &'r StringRecord, idx: usize) -> &'r str {
    record.get(idx).unwrap_or("").trim()
}

fn parse_date(table: &'static str, row: usize, value: &str) -> LoadResult<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .ok_or_else(|| DataFormatError::BadDate {
            table,
            row,
            value: value.to_string(),
        })
}

fn parse_number(table: &'static str, row: usize, column: &str, value: &str) -> LoadResult<f64> {
    value.parse().map_err(|_| DataFormatError::BadNumber {
        table,
        row,
        column: column.to_string(),
        value: value.to_string(),
    })
}

fn parse_hour(table: &'static str, row: usize, value: &str) -> LoadResult<u32> {
    value.parse().map_err(|_| DataFormatError::BadNumber {
        table,
        row,
        column: HOUR_COLUMN.to_string(),
        value: value.to_string(),
    })
}
