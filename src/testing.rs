//! Test doubles shared by the unit and integration tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::{ProductError, Result};
use crate::models::{Product, ProductRequest};
use crate::storage::{InMemoryProductRepository, ProductRepository};

pub fn request(id: Option<i64>, name: &str, price: f64) -> ProductRequest {
    ProductRequest {
        id,
        name: name.to_string(),
        price,
    }
}

/// In-memory repository that counts lookups and can be switched offline.
#[derive(Debug)]
pub struct CountingRepository {
    inner: InMemoryProductRepository,
    find_calls: AtomicUsize,
    available: AtomicBool,
}

impl Default for CountingRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CountingRepository {
    pub fn new() -> Self {
        Self {
            inner: InMemoryProductRepository::new(),
            find_calls: AtomicUsize::new(0),
            available: AtomicBool::new(true),
        }
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check(&self) -> Result<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(ProductError::StorageUnavailable("connection refused".to_string()))
        }
    }
}

#[async_trait]
impl ProductRepository for CountingRepository {
    async fn save(&self, product: Product) -> Result<Product> {
        self.check()?;
        self.inner.save(product).await
    }

    async fn find_all(&self) -> Result<Vec<Product>> {
        self.check()?;
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.find_by_id(id).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        self.check()?;
        self.inner.delete_by_id(id).await
    }

    async fn insert(&self, name: String, price: f64) -> Result<Product> {
        self.check()?;
        self.inner.insert(name, price).await
    }
}
