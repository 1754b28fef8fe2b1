//! Service layer: aggregation, filtering, view selection, session state.
//!
//! Everything here is pure computation over the loaded [`crate::models::DataContext`]
//! except [`session`], which owns the one mutable piece of the system (the
//! current route/year selection).

pub mod aggregation;
pub mod filtering;
pub mod session;
pub mod view;


pub use aggregation::{compute_heatmap, HeatmapMatrix, HourlyField, MONTH_LABELS};
pub use filtering::filter_by_year;
pub use session::{DashboardSession, FilterState, ViewSink};
pub use view::{select_view, Route, ViewPayload};
