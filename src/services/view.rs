//! View selection: map a (route, year) pair to the payload a report renders.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aggregation::{compute_heatmap, HeatmapMatrix, HourlyField};
use super::filtering::filter_by_year;
use crate::error::InvalidYearError;
use crate::models::{DataContext, EmissionSource};

/// Welcome header shown above every report view.
pub const DASHBOARD_TITLE: &str = "Welcome to the Generation and Emissions Analytics Dashboard!";
pub const DASHBOARD_BLURB: &str = "This dashboard analyzes U.S. Department of Energy power \
generation and emissions trends over time. Navigate to the sidebar to start exploring the data!";

/// Report views reachable from the sidebar navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Generation,
    Emissions,
}

impl Route {
    /// Parse a navigation path segment. `None` for anything outside the
    /// closed route set; the caller degrades to the not-found payload.
    pub fn parse(segment: &str) -> Option<Route> {
        match segment.trim_start_matches('/') {
            "generation" => Some(Route::Generation),
            "emissions" => Some(Route::Emissions),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Route::Generation => "generation",
            Route::Emissions => "emissions",
        }
    }
}

/// One (date, value) sample of a daily series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// A titled daily line series with axis labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<SeriesPoint>,
}

/// One named sub-series of the per-source emissions breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSeries {
    pub source: EmissionSource,
    pub name: String,
    pub points: Vec<SeriesPoint>,
}

/// The per-source emissions comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownSeries {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend_title: String,
    pub series: Vec<SourceSeries>,
}

/// The heatmap chart: matrix plus labels for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapView {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub month_labels: Vec<String>,
    pub matrix: HeatmapMatrix,
}

/// Welcome copy shown above both report views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageHeader {
    pub title: String,
    pub blurb: String,
}

impl Default for PageHeader {
    fn default() -> Self {
        Self {
            title: DASHBOARD_TITLE.to_string(),
            blurb: DASHBOARD_BLURB.to_string(),
        }
    }
}

/// Everything one report view needs from the data layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewPayload {
    Generation {
        header: PageHeader,
        year: i32,
        net_generation: DailySeries,
        heatmap: HeatmapView,
    },
    Emissions {
        header: PageHeader,
        year: i32,
        co2_total: DailySeries,
        by_source: BreakdownSeries,
    },
    /// Unrecognized navigation target. A value, not an error: the dashboard
    /// shows an empty page rather than failing.
    NotFound,
}

/// Build the payload for the view at `route`, restricted to `year`.
///
/// Pure and deterministic: identical inputs produce identical payloads.
/// `route = None` models an unknown navigation target and yields
/// [`ViewPayload::NotFound`] without touching the tables.
pub fn select_view(
    route: Option<Route>,
    year: i32,
    ctx: &DataContext,
) -> Result<ViewPayload, InvalidYearError> {
    let Some(route) = route else {
        return Ok(ViewPayload::NotFound);
    };

    match route {
        Route::Generation => {
            let rows = filter_by_year(&ctx.daily, year, &ctx.years)?;
            let points = rows
                .iter()
                .map(|r| SeriesPoint {
                    date: r.local_date,
                    value: r.net_generation,
                })
                .collect();

            let matrix = compute_heatmap(&ctx.hourly, HourlyField::NetGeneration, Some(year));
            let month_labels = matrix
                .month_labels()
                .into_iter()
                .map(str::to_string)
                .collect();

            Ok(ViewPayload::Generation {
                header: PageHeader::default(),
                year,
                net_generation: DailySeries {
                    title: format!("Net Generation by Date for {} (MWh)", year),
                    x_label: "Date".to_string(),
                    y_label: "Net Generation (MWh)".to_string(),
                    points,
                },
                heatmap: HeatmapView {
                    title: format!("Average Hourly Net Generation Heatmap for {}", year),
                    x_label: "Month".to_string(),
                    y_label: "Hour".to_string(),
                    month_labels,
                    matrix,
                },
            })
        }
        Route::Emissions => {
            let rows = filter_by_year(&ctx.daily, year, &ctx.years)?;

            let co2_points = rows
                .iter()
                .map(|r| SeriesPoint {
                    date: r.local_date,
                    value: r.co2_total,
                })
                .collect();

            let series = EmissionSource::ALL
                .iter()
                .map(|&source| SourceSeries {
                    source,
                    name: source.label().to_string(),
                    points: rows
                        .iter()
                        .map(|r| SeriesPoint {
                            date: r.local_date,
                            value: r.co2_for(source),
                        })
                        .collect(),
                })
                .collect();

            Ok(ViewPayload::Emissions {
                header: PageHeader::default(),
                year,
                co2_total: DailySeries {
                    title: format!(
                        "Carbon Emissions Generated by Date for {} (Metric Tons)",
                        year
                    ),
                    x_label: "Date".to_string(),
                    y_label: "CO2 Emissions Generated (Metric Tons)".to_string(),
                    points: co2_points,
                },
                by_source: BreakdownSeries {
                    title: format!(
                        "Carbon Emissions Generated by Type for {} (Metric Tons)",
                        year
                    ),
                    x_label: "Date".to_string(),
                    y_label: "CO2 Emissions (Metric Tons)".to_string(),
                    legend_title: "Type".to_string(),
                    series,
                },
            })
        }
    }
}
