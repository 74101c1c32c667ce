//! HTTP request handlers for the route API

pub mod demo;
pub mod places;
