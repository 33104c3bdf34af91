//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::RouteCache;
use crate::router::TransportRouter;

/// Shared application state.
///
/// Contains the finalized router and the cache of its answers.
#[derive(Clone)]
pub struct AppState {
    /// Read-only router over the loaded network
    pub router: Arc<TransportRouter>,

    /// Memoised route answers
    pub cache: Arc<RouteCache>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(router: TransportRouter, cache: RouteCache) -> Self {
        Self {
            router: Arc::new(router),
            cache: Arc::new(cache),
        }
    }
}
