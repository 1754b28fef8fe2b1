//! Session-scoped filter state and push-based recomputation.
//!
//! The session owns the single mutable piece of the system: the current
//! (route, year) selection. Route and year are two independent axes, each a
//! plain assignment; any combination of a known route and a catalog year is
//! reachable from any other in one step.

use std::sync::Arc;

use log::warn;

use crate::models::{DataContext, YearCatalog};

use super::view::{select_view, Route, ViewPayload};

/// Current sidebar selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterState {
    pub selected_route: Route,
    pub selected_year: i32,
}

impl FilterState {
    /// Session start: Generation view, first catalog year.
    pub fn initial(catalog: &YearCatalog) -> Self {
        Self {
            selected_route: Route::Generation,
            selected_year: catalog.default_year().unwrap_or_default(),
        }
    }
}

/// Rendering collaborator seam.
///
/// Deliveries carry a monotonic revision. If interaction events outrun the
/// renderer, implementations must apply only deliveries newer than the last
/// one applied and discard the rest (last-write-wins).
pub trait ViewSink {
    fn apply(&mut self, revision: u64, payload: ViewPayload);
}

/// Interactive session: holds the filter, recomputes on every event, pushes
/// the result to the sink.
///
/// Recomputation is synchronous and unconditional; nothing is memoized
/// because recomputing is cheap and bounded by dataset size.
pub struct DashboardSession<S: ViewSink> {
    ctx: Arc<DataContext>,
    state: FilterState,
    revision: u64,
    sink: S,
}

impl<S: ViewSink> DashboardSession<S> {
    /// Start a session and push the initial payload.
    pub fn new(ctx: Arc<DataContext>, sink: S) -> Self {
        let state = FilterState::initial(&ctx.years);
        let mut session = Self {
            ctx,
            state,
            revision: 0,
            sink,
        };
        let payload = session.recompute();
        session.deliver(payload);
        session
    }

    pub fn filter(&self) -> FilterState {
        self.state
    }

    pub fn context(&self) -> &DataContext {
        &self.ctx
    }

    /// Handle a year selection event.
    ///
    /// An out-of-catalog year is clamped back to the catalog default instead
    /// of being surfaced to the renderer.
    pub fn on_year_changed(&mut self, year: i32) {
        let payload = match select_view(Some(self.state.selected_route), year, &self.ctx) {
            Ok(payload) => {
                self.state.selected_year = year;
                payload
            }
            Err(err) => {
                warn!("rejected year selection: {}", err);
                if let Some(fallback) = self.ctx.years.default_year() {
                    self.state.selected_year = fallback;
                }
                self.recompute()
            }
        };
        self.deliver(payload);
    }

    /// Handle a navigation event. `None` is an unrecognized target: the
    /// filter stays untouched and the not-found payload is pushed.
    pub fn on_route_changed(&mut self, route: Option<Route>) {
        let payload = match route {
            Some(route) => {
                self.state.selected_route = route;
                self.recompute()
            }
            None => ViewPayload::NotFound,
        };
        self.deliver(payload);
    }

    fn recompute(&self) -> ViewPayload {
        match select_view(Some(self.state.selected_route), self.state.selected_year, &self.ctx) {
            Ok(payload) => payload,
            // Only reachable with an empty catalog (no daily rows at all).
            Err(_) => ViewPayload::NotFound,
        }
    }

    fn deliver(&mut self, payload: ViewPayload) {
        self.revision += 1;
        self.sink.apply(self.revision, payload);
    }
}
