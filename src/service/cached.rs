//! Cached Product Store
//!
//! Read-through caching for `find_by_id` and evict-on-delete for
//! `delete_by_id`, composed around a `ProductStore`.
//!
//! The region and storage are updated independently. Two concurrent misses on
//! one id may both populate the region with the same value. A delete racing an
//! in-flight miss can run its eviction before that miss writes the region,
//! leaving a stale entry until the next delete of that id. Both windows are
//! accepted.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CachePolicy, CacheRegion, CacheStats};
use crate::error::Result;
use crate::models::Product;
use crate::service::ProductStore;

#[derive(Clone)]
pub struct CachedProductStore {
    inner: ProductStore,
    region: Arc<RwLock<CacheRegion>>,
    policy: CachePolicy,
}

impl CachedProductStore {
    pub fn new(inner: ProductStore, region: Arc<RwLock<CacheRegion>>, policy: CachePolicy) -> Self {
        Self {
            inner,
            region,
            policy,
        }
    }

    /// Underlying store, for the operations that bypass the cache.
    pub fn store(&self) -> &ProductStore {
        &self.inner
    }

    // == Find By Id ==
    /// Returns the cached product when present; otherwise loads from storage
    /// and caches the result unless the policy skips it. Storage errors are
    /// returned unchanged and never cached.
    pub async fn find_by_id(&self, id: i64) -> Result<Product> {
        if let Some(product) = self.region.read().await.get(id) {
            debug!("cache hit for product {}", id);
            return Ok(product);
        }

        debug!("cache miss for product {}", id);
        let product = self.inner.find_by_id(id).await?;

        let mut region = self.region.write().await;
        if self.policy.should_cache(&product) {
            region.put(product.clone());
        } else {
            debug!("not caching product {} (price {})", id, product.price);
            region.record_skip();
        }

        Ok(product)
    }

    // == Delete By Id ==
    /// Deletes from storage, then evicts the region entry whatever the
    /// storage outcome was. A storage error is still returned afterwards.
    pub async fn delete_by_id(&self, id: i64) -> Result<String> {
        let result = self.inner.delete_by_id(id).await;

        if self.region.write().await.evict(id) {
            debug!("evicted product {} from cache", id);
        }

        result
    }

    pub async fn stats(&self) -> CacheStats {
        self.region.read().await.stats()
    }

    pub async fn region_name(&self) -> String {
        self.region.read().await.name().to_string()
    }
}
