//! route-api - REST API layer for the route batch service
//!
//! Exposes the batch pipeline from `route-core` over HTTP.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use route_api::{create_router, AppState};
//! use route_core::{JsonFileStore, RouteBatchProcessor};
//!
//! let state = AppState::new(RouteBatchProcessor::default(), Arc::new(JsonFileStore::default()));
//! let router = create_router(state);
//! ```

pub mod cors;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create the REST API router with the given application state
pub fn create_router(state: AppState) -> Router {
    let cors = cors::cors_layer(state.allowed_origins());

    Router::new()
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Batch pipeline
        .route("/places", post(handlers::places::receive_places))
        // Example endpoints
        .route("/", get(handlers::demo::read_root))
        .route("/items/{item_id}", get(handlers::demo::read_item))
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
