//! Service Module
//!
//! `ProductStore` is the facade over the storage port. `CachedProductStore`
//! wraps its lookup and delete paths with the Product cache region.

mod cached;
mod store;

#[cfg(test)]
mod property_tests;

pub use cached::CachedProductStore;
pub use store::{ProductStore, DELETE_CONFIRMATION};
