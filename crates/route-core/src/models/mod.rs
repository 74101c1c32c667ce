//! Shared data models

mod place;

pub use place::*;
