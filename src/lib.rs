//! Product Cache - A small Product CRUD service
//!
//! Serves Product records over HTTP with a read-through cache region in front
//! of storage: lookups populate the cache, deletes evict it, and a pluggable
//! policy decides which results are never cached.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod storage;
#[doc(hidden)]
pub mod testing;

pub use api::AppState;
pub use config::Config;
