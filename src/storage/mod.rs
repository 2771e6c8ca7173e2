//! Storage Module
//!
//! The persistence port the product store is built on, plus an in-memory
//! implementation used by the server binary and the tests.

mod memory;

pub use memory::InMemoryProductRepository;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Product;

// == Product Repository ==
/// Persistence collaborator holding Product records keyed by identifier.
///
/// Implementations report an unreachable backend as
/// `ProductError::StorageUnavailable`.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Inserts or replaces the record under `product.id`.
    async fn save(&self, product: Product) -> Result<Product>;

    /// Returns every stored record.
    async fn find_all(&self) -> Result<Vec<Product>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>>;

    /// Removes the record, returning whether one existed.
    async fn delete_by_id(&self, id: i64) -> Result<bool>;

    /// Stores a new record under a freshly assigned identifier. A record
    /// with identical name and price is returned as-is instead, so repeating
    /// the same id-less save does not create duplicates.
    async fn insert(&self, name: String, price: f64) -> Result<Product>;
}
