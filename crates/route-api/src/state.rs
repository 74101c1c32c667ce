//! Application state for the route API

use std::sync::Arc;

use route_core::{PlaceStore, RouteBatchProcessor};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Batch pipeline
    processor: Arc<RouteBatchProcessor>,
    /// Where processed batches are persisted
    store: Arc<dyn PlaceStore>,
    /// Origins accepted by the CORS layer (empty = any)
    allowed_origins: Arc<Vec<String>>,
}

impl AppState {
    /// Create a new AppState with the given processor and store
    pub fn new(processor: RouteBatchProcessor, store: Arc<dyn PlaceStore>) -> Self {
        Self {
            processor: Arc::new(processor),
            store,
            allowed_origins: Arc::new(Vec::new()),
        }
    }

    /// Restrict cross-origin requests to the given origins
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.allowed_origins = Arc::new(origins);
        self
    }

    pub fn processor(&self) -> &RouteBatchProcessor {
        &self.processor
    }

    pub fn store(&self) -> &dyn PlaceStore {
        self.store.as_ref()
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}
