//! Cache Region Module
//!
//! A named, unbounded key-value region holding Product records by identifier.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::cache::CacheStats;
use crate::models::Product;

// == Cache Region ==
/// Product cache region. No TTL and no capacity limit.
#[derive(Debug)]
pub struct CacheRegion {
    /// Region name
    name: String,
    /// Cached records keyed by product identifier
    entries: HashMap<i64, Product>,
    // Counters are atomic so lookups only need shared access.
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
    skipped: AtomicU64,
}

impl CacheRegion {
    // == Constructor ==
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: HashMap::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
            skipped: AtomicU64::new(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // == Get ==
    /// Looks up a cached product, recording a hit or a miss.
    pub fn get(&self, id: i64) -> Option<Product> {
        let found = self.entries.get(&id).cloned();
        let counter = if found.is_some() { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    // == Put ==
    /// Stores a product under its identifier, replacing any previous entry.
    pub fn put(&mut self, product: Product) {
        self.entries.insert(product.id, product);
    }

    // == Evict ==
    /// Removes the entry for `id`. Returns whether an entry was present.
    pub fn evict(&mut self, id: i64) -> bool {
        let removed = self.entries.remove(&id).is_some();
        if removed {
            self.evictions.fetch_add(1, Ordering::Relaxed);
        }
        removed
    }

    /// Counts a fetched result that the cache policy declined to store.
    pub fn record_skip(&self) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns true when an entry exists, without touching statistics.
    pub fn contains(&self, id: i64) -> bool {
        self.entries.contains_key(&id)
    }

    // == Stats ==
    /// Snapshot of the counters and current entry count.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            skipped: self.skipped.load(Ordering::Relaxed),
            total_entries: self.entries.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
