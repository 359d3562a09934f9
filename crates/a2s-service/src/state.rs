//! Application state.

use std::sync::Arc;

use a2s_store::Store;

use crate::config::ServiceConfig;

/// Application state shared across handlers.
///
/// The store is created once at startup and handed in here; handlers reach
/// it only through this state.
#[derive(Clone)]
pub struct AppState {
    /// The storage backend.
    pub store: Arc<dyn Store>,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(store: Arc<dyn Store>, config: ServiceConfig) -> Self {
        Self { store, config }
    }
}
