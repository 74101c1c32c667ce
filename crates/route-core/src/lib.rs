//! route-core - Core types and the route batching pipeline
//!
//! This crate holds the place data model, the batch processor that turns an
//! incoming list of places into route links, and the persistence seam used to
//! store the last processed batch.

pub mod batch;
pub mod error;
pub mod models;
pub mod routing;
pub mod store;

pub use batch::{ProcessedBatch, RouteBatchProcessor, DEFAULT_GROUP_SIZE};
pub use error::{RouteError, RouteResult};
pub use models::*;
pub use store::{JsonFileStore, MemoryStore, PlaceStore, DEFAULT_OUTPUT_PATH};
