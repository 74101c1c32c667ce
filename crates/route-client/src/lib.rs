//! Route Client Library
//!
//! Provides a typed HTTP client for the route batch service.
//!
//! # Example
//!
//! ```rust,no_run
//! use route_client::RouteClient;
//! use route_core::Place;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RouteClient::new("http://localhost:8000")?;
//!
//!     let batch = client
//!         .submit_places(&[Place::new("a", "Addr A"), Place::new("b", "Addr B")])
//!         .await?;
//!
//!     for url in &batch.google_maps_urls {
//!         println!("{}", url);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;

pub use client::{ItemEcho, RouteClient};
pub use error::{Result, RouteClientError};

// Re-export core types for convenience
pub use route_core::{Geometry, Place, ProcessedBatch, Viewport};
