//! Cache Policy Module
//!
//! Decides, per fetched result, whether the cache write is skipped.

use std::fmt;
use std::sync::Arc;

use crate::models::Product;

type SkipPredicate = dyn Fn(&Product) -> bool + Send + Sync;

/// Wraps a predicate over a fetched product. When it returns `true` the
/// result is returned to the caller but not cached. Evaluated on every miss.
#[derive(Clone)]
pub struct CachePolicy {
    skip: Arc<SkipPredicate>,
}

impl CachePolicy {
    /// Builds a policy from an arbitrary skip predicate.
    pub fn unless<F>(predicate: F) -> Self
    where
        F: Fn(&Product) -> bool + Send + Sync + 'static,
    {
        Self {
            skip: Arc::new(predicate),
        }
    }

    /// Caches every result.
    pub fn always() -> Self {
        Self::unless(|_| false)
    }

    /// Skips caching for products priced strictly above `threshold`.
    pub fn skip_above_price(threshold: f64) -> Self {
        Self::unless(move |product| product.price > threshold)
    }

    pub fn should_cache(&self, product: &Product) -> bool {
        !(self.skip)(product)
    }
}

impl fmt::Debug for CachePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachePolicy").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_above_price_boundary() {
        let policy = CachePolicy::skip_above_price(1000.0);
        assert!(policy.should_cache(&Product::new(1, "Pen", 5.0)));
        assert!(policy.should_cache(&Product::new(2, "Watch", 1000.0)));
        assert!(!policy.should_cache(&Product::new(3, "Laptop", 1500.0)));
    }

    #[test]
    fn test_always_caches() {
        let policy = CachePolicy::always();
        assert!(policy.should_cache(&Product::new(1, "Yacht", 1e9)));
    }

    #[test]
    fn test_custom_predicate() {
        let policy = CachePolicy::unless(|p| p.name.starts_with("tmp"));
        assert!(!policy.should_cache(&Product::new(1, "tmp-item", 1.0)));
        assert!(policy.should_cache(&Product::new(2, "Pen", 1.0)));
    }
}
