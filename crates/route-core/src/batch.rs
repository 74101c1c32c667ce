//! RouteBatchProcessor - turns a submitted place list into route links
//!
//! Pipeline per request: deduplicate → reverse → persist → chunk → links.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{RouteError, RouteResult};
use crate::models::Place;
use crate::routing;
use crate::store::PlaceStore;

/// Places per route group: origin + 8 waypoints + destination
pub const DEFAULT_GROUP_SIZE: usize = 10;

/// Result of processing one batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedBatch {
    /// Deduplicated places in reverse submission order
    pub received_places: Vec<Place>,
    /// One directions link per route group
    pub google_maps_urls: Vec<String>,
}

/// Batch processor with a fixed route group size
#[derive(Debug, Clone)]
pub struct RouteBatchProcessor {
    group_size: usize,
}

impl Default for RouteBatchProcessor {
    fn default() -> Self {
        Self {
            group_size: DEFAULT_GROUP_SIZE,
        }
    }
}

impl RouteBatchProcessor {
    /// Create a processor with a custom group size (at least 2)
    pub fn new(group_size: usize) -> RouteResult<Self> {
        if group_size < 2 {
            return Err(RouteError::InvalidGroupSize(group_size));
        }
        Ok(Self { group_size })
    }

    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// Keep the first place seen for each `place_id`, in first-seen order
    pub fn deduplicate(places: Vec<Place>) -> Vec<Place> {
        let mut seen = HashSet::with_capacity(places.len());
        places
            .into_iter()
            .filter(|place| seen.insert(place.place_id.clone()))
            .collect()
    }

    pub fn reverse(mut places: Vec<Place>) -> Vec<Place> {
        places.reverse();
        places
    }

    /// Overwrite the store with `places`
    pub async fn persist(places: &[Place], store: &dyn PlaceStore) -> RouteResult<()> {
        store.save(places).await.map_err(|e| {
            tracing::error!(store = %store.describe(), error = %e, "Failed to persist places");
            e
        })
    }

    /// Split into overlapping groups of at most `group_size` places
    pub fn chunk<'a>(&self, places: &'a [Place]) -> Vec<&'a [Place]> {
        routing::chunk(places, self.group_size)
    }

    /// One directions link per group; empty for fewer than two places
    pub fn generate_route_urls(&self, places: &[Place]) -> Vec<String> {
        routing::route_urls(places, self.group_size)
    }

    /// Run the full pipeline and persist the result to `store`
    pub async fn process(
        &self,
        places: Vec<Place>,
        store: &dyn PlaceStore,
    ) -> RouteResult<ProcessedBatch> {
        let submitted = places.len();

        let unique = Self::deduplicate(places);
        let received_places = Self::reverse(unique);

        Self::persist(&received_places, store).await?;

        let google_maps_urls = self.generate_route_urls(&received_places);

        tracing::info!(
            submitted,
            unique = received_places.len(),
            urls = google_maps_urls.len(),
            store = %store.describe(),
            "Processed place batch"
        );

        Ok(ProcessedBatch {
            received_places,
            google_maps_urls,
        })
    }
}
