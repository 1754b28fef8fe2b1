//! Application state for the HTTP server.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::models::DataContext;
use crate::services::FilterState;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Loaded dataset, immutable after startup
    pub context: Arc<DataContext>,
    /// Session filter, moved by interactive requests
    pub filter: Arc<RwLock<FilterState>>,
}

impl AppState {
    /// Create the application state for a loaded dataset.
    pub fn new(context: Arc<DataContext>) -> Self {
        let filter = FilterState::initial(&context.years);
        Self {
            context,
            filter: Arc::new(RwLock::new(filter)),
        }
    }
}
