//! Product Store
//!
//! Pass-through facade over a `ProductRepository`. Does not touch the cache.

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::{ProductError, Result};
use crate::models::{Product, ProductRequest};
use crate::storage::ProductRepository;

/// Confirmation returned when a delete removed a stored record.
pub const DELETE_CONFIRMATION: &str = "product removed !!";

#[derive(Clone)]
pub struct ProductStore {
    repository: Arc<dyn ProductRepository>,
}

impl ProductStore {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    // == Save ==
    /// Upserts by identifier. A request without an id gets one assigned by
    /// storage, or resolves to the stored record with the same content.
    pub async fn save(&self, request: ProductRequest) -> Result<Product> {
        let saved = match request.id {
            Some(id) => {
                self.repository
                    .save(Product::new(id, request.name, request.price))
                    .await
            }
            None => self.repository.insert(request.name, request.price).await,
        }
        .inspect_err(|e| warn!("save failed: {}", e))?;

        info!("Saved product {}", saved.id);
        Ok(saved)
    }

    // == Find All ==
    pub async fn find_all(&self) -> Result<Vec<Product>> {
        self.repository
            .find_all()
            .await
            .inspect_err(|e| warn!("find_all failed: {}", e))
    }

    // == Find By Id ==
    /// Fails with `NotFound` when storage has no record for `id`.
    pub async fn find_by_id(&self, id: i64) -> Result<Product> {
        self.repository
            .find_by_id(id)
            .await
            .inspect_err(|e| warn!("find_by_id({}) failed: {}", id, e))?
            .ok_or(ProductError::NotFound(id))
    }

    // == Delete By Id ==
    /// Deleting a missing identifier is not an error; the message says so.
    pub async fn delete_by_id(&self, id: i64) -> Result<String> {
        let removed = self
            .repository
            .delete_by_id(id)
            .await
            .inspect_err(|e| warn!("delete_by_id({}) failed: {}", id, e))?;

        if removed {
            info!("Deleted product {}", id);
            Ok(DELETE_CONFIRMATION.to_string())
        } else {
            Ok(format!("product {} not found", id))
        }
    }
}
