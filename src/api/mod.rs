//! API Module
//!
//! HTTP handlers and routing for the product service REST API.
//!
//! # Endpoints
//! - `POST /product` - Create or update a product
//! - `GET /product` - List all products
//! - `GET /product/:id` - Fetch a product (cache-checked)
//! - `DELETE /product/:id` - Delete a product (cache-evicted)
//! - `GET /product/cache/stats` - Cache region statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
