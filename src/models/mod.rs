//! Domain entity and DTOs for the product service API
//!
//! This module defines the `Product` record together with the types used for
//! serializing/deserializing HTTP request and response bodies.

pub mod product;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use product::Product;
pub use requests::ProductRequest;
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
