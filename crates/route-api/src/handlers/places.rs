//! Place batch handler

use axum::extract::State;
use axum::Json;
use route_core::{Place, ProcessedBatch};

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// POST /places
/// Deduplicate, reverse and persist the submitted places, then return them
/// together with the generated route links
pub async fn receive_places(
    State(state): State<AppState>,
    ApiJson(places): ApiJson<Vec<Place>>,
) -> Result<Json<ProcessedBatch>, ApiError> {
    tracing::debug!(count = places.len(), "Received places");

    let batch = state.processor().process(places, state.store()).await?;

    Ok(Json(batch))
}
