//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for the actual computation.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{HealthResponse, HeatmapQuery, ViewQuery, YearsResponse};
use super::error::AppError;
use super::state::AppState;
use crate::error::InvalidYearError;
use crate::services::{compute_heatmap, select_view, HeatmapMatrix, HourlyField, Route, ViewPayload};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint reporting the loaded dataset size.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        daily_rows: state.context.daily.len(),
        hourly_rows: state.context.hourly.len(),
    }))
}

/// GET /v1/years
///
/// The year selector options derived from the daily table.
pub async fn list_years(State(state): State<AppState>) -> HandlerResult<YearsResponse> {
    Ok(Json(YearsResponse {
        years: state.context.years.years().to_vec(),
        default_year: state.context.years.default_year(),
    }))
}

/// GET /v1/views/{route}?year=
///
/// The payload for one report view. An unrecognized route segment yields the
/// not-found payload with status 200, mirroring the dashboard's empty page.
/// A year outside the catalog is a 400: at this boundary the caller is
/// external, so it gets the error instead of a silent clamp.
pub async fn get_view(
    State(state): State<AppState>,
    Path(route): Path<String>,
    Query(query): Query<ViewQuery>,
) -> HandlerResult<ViewPayload> {
    let route = Route::parse(&route);
    let year = query
        .year
        .unwrap_or_else(|| state.filter.read().selected_year);

    let payload = select_view(route, year, &state.context)?;

    // A successful selection is an interaction event: move the session
    // filter so subsequent requests without a year stay consistent.
    if let Some(route) = route {
        let mut filter = state.filter.write();
        filter.selected_route = route;
        filter.selected_year = year;
    }

    Ok(Json(payload))
}

/// GET /v1/heatmap?year=&field=
///
/// The bare hour-by-month matrix, unfiltered unless a year is given.
pub async fn get_heatmap(
    State(state): State<AppState>,
    Query(query): Query<HeatmapQuery>,
) -> HandlerResult<HeatmapMatrix> {
    if let Some(year) = query.year {
        if !state.context.years.contains(year) {
            return Err(InvalidYearError {
                year,
                available: state.context.years.years().to_vec(),
            }
            .into());
        }
    }

    let field = query.field.unwrap_or(HourlyField::NetGeneration);
    let matrix = compute_heatmap(&state.context.hourly, field, query.year);

    Ok(Json(matrix))
}
