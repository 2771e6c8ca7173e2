//! In-memory repository backed by an ordered map.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ProductRepository;
use crate::error::{ProductError, Result};
use crate::models::Product;

/// Records are kept in primary-key order, so `find_all` is ordered by id.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    records: RwLock<BTreeMap<i64, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, product: Product) -> Result<Product> {
        let mut records = self.records.write().await;
        records.insert(product.id, product.clone());
        Ok(product)
    }

    async fn find_all(&self) -> Result<Vec<Product>> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        let records = self.records.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let mut records = self.records.write().await;
        Ok(records.remove(&id).is_some())
    }

    async fn insert(&self, name: String, price: f64) -> Result<Product> {
        // Lookup, assignment and insert happen under one write lock.
        let mut records = self.records.write().await;
        if let Some(existing) = records
            .values()
            .find(|p| p.name == name && p.price == price)
        {
            return Ok(existing.clone());
        }

        let id = match records.keys().next_back() {
            None => 1,
            Some(max) => max.checked_add(1).ok_or_else(|| {
                ProductError::Internal("product id space exhausted".to_string())
            })?,
        };
        let product = Product::new(id, name, price);
        records.insert(id, product.clone());
        Ok(product)
    }
}
