//! Data Transfer Objects for the HTTP API.
//!
//! The view payload types already derive Serialize/Deserialize and are
//! re-exported here; the structs below only exist at the HTTP boundary.

use serde::{Deserialize, Serialize};

pub use crate::services::{HeatmapMatrix, HourlyField, ViewPayload};

/// Query parameters for the view endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ViewQuery {
    /// Year to restrict the view to; defaults to the session selection
    #[serde(default)]
    pub year: Option<i32>,
}

/// Query parameters for the heatmap endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HeatmapQuery {
    /// Year restriction; omit for all years
    #[serde(default)]
    pub year: Option<i32>,
    /// Aggregated column; defaults to net generation
    #[serde(default)]
    pub field: Option<HourlyField>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Rows loaded into the daily table
    pub daily_rows: usize,
    /// Rows loaded into the hourly table
    pub hourly_rows: usize,
}

/// Year selector options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearsResponse {
    /// Selectable years, in catalog (first-seen) order
    pub years: Vec<i32>,
    /// Initial selection for a new session
    pub default_year: Option<i32>,
}
