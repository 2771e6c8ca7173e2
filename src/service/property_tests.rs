//! Property-Based Tests for the cached product store
//!
//! Uses proptest to check the read-through, skip and eviction rules over
//! generated products.

use std::sync::Arc;

use proptest::prelude::*;
use tokio::runtime::Runtime;
use tokio::sync::RwLock;

use crate::cache::{CachePolicy, CacheRegion, PRODUCT_REGION};
use crate::error::ProductError;
use crate::models::Product;
use crate::testing::{request, CountingRepository};
use crate::service::{CachedProductStore, ProductStore};

// == Test Configuration ==
const THRESHOLD: f64 = 1000.0;

fn runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

fn setup() -> (Arc<CountingRepository>, CachedProductStore) {
    let repo = Arc::new(CountingRepository::new());
    let region = Arc::new(RwLock::new(CacheRegion::new(PRODUCT_REGION)));
    let cached = CachedProductStore::new(
        ProductStore::new(repo.clone()),
        region,
        CachePolicy::skip_above_price(THRESHOLD),
    );
    (repo, cached)
}

// == Strategies ==
fn id_strategy() -> impl Strategy<Value = i64> {
    1i64..10_000
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{0,31}"
}

fn cheap_price() -> impl Strategy<Value = f64> {
    0.0..=THRESHOLD
}

fn expensive_price() -> impl Strategy<Value = f64> {
    (THRESHOLD + 0.01)..1_000_000.0
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // A cacheable product is served from the region on the second lookup.
    #[test]
    fn prop_cheap_products_are_cached(id in id_strategy(), name in name_strategy(), price in cheap_price()) {
        let rt = runtime();
        let (repo, cached) = setup();

        let (first, second) = rt.block_on(async {
            cached.store().save(request(Some(id), &name, price)).await.unwrap();
            let first = cached.find_by_id(id).await.unwrap();
            let second = cached.find_by_id(id).await.unwrap();
            (first, second)
        });

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, Product::new(id, name, price));
        prop_assert_eq!(repo.find_calls(), 1);
    }

    // Products above the threshold hit storage on every lookup.
    #[test]
    fn prop_expensive_products_are_not_cached(id in id_strategy(), name in name_strategy(), price in expensive_price()) {
        let rt = runtime();
        let (repo, cached) = setup();

        rt.block_on(async {
            cached.store().save(request(Some(id), &name, price)).await.unwrap();
            cached.find_by_id(id).await.unwrap();
            cached.find_by_id(id).await.unwrap();
        });

        prop_assert_eq!(repo.find_calls(), 2);
    }

    // After a delete, the next lookup reaches storage and reports NotFound.
    #[test]
    fn prop_delete_evicts(id in id_strategy(), name in name_strategy(), price in cheap_price()) {
        let rt = runtime();
        let (repo, cached) = setup();

        let result = rt.block_on(async {
            cached.store().save(request(Some(id), &name, price)).await.unwrap();
            cached.find_by_id(id).await.unwrap();
            cached.delete_by_id(id).await.unwrap();
            cached.find_by_id(id).await
        });

        prop_assert_eq!(result, Err(ProductError::NotFound(id)));
        prop_assert_eq!(repo.find_calls(), 2);
    }

    // Deleting an unknown id never errors.
    #[test]
    fn prop_delete_missing_is_ok(id in id_strategy()) {
        let rt = runtime();
        let (_repo, cached) = setup();

        let result = rt.block_on(cached.delete_by_id(id));
        prop_assert!(result.is_ok());
    }

    // Saving identical content twice yields the same record both times,
    // whether or not the request names an id.
    #[test]
    fn prop_save_is_idempotent(id in prop::option::of(id_strategy()), name in name_strategy(), price in cheap_price()) {
        let rt = runtime();
        let (_repo, cached) = setup();

        let (a, b, count) = rt.block_on(async {
            let a = cached.store().save(request(id, &name, price)).await.unwrap();
            let b = cached.store().save(request(id, &name, price)).await.unwrap();
            let count = cached.store().find_all().await.unwrap().len();
            (a, b, count)
        });

        prop_assert_eq!(a, b);
        prop_assert_eq!(count, 1);
    }
}
