//! API Handlers
//!
//! HTTP request handlers for each product service endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tokio::sync::RwLock;

use crate::cache::{CachePolicy, CacheRegion, CacheStats, PRODUCT_REGION};
use crate::config::Config;
use crate::error::{ProductError, Result};
use crate::models::{HealthResponse, Product, ProductRequest, StatsResponse};
use crate::service::{CachedProductStore, ProductStore};
use crate::storage::{InMemoryProductRepository, ProductRepository};

/// Application state shared across all handlers.
///
/// `cached` is `None` when caching is disabled; lookups and deletes then go
/// straight to the store.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductStore,
    pub cached: Option<CachedProductStore>,
}

impl AppState {
    /// Creates a state with the cache region in front of `repository`.
    pub fn new(repository: Arc<dyn ProductRepository>, policy: CachePolicy) -> Self {
        let products = ProductStore::new(repository);
        let region = Arc::new(RwLock::new(CacheRegion::new(PRODUCT_REGION)));
        let cached = CachedProductStore::new(products.clone(), region, policy);
        Self {
            products,
            cached: Some(cached),
        }
    }

    /// Creates a state with no cache layer.
    pub fn uncached(repository: Arc<dyn ProductRepository>) -> Self {
        Self {
            products: ProductStore::new(repository),
            cached: None,
        }
    }

    /// Creates a new AppState from configuration, backed by in-memory storage.
    pub fn from_config(config: &Config) -> Self {
        let repository = Arc::new(InMemoryProductRepository::new());
        if config.cache_enabled {
            Self::new(repository, CachePolicy::skip_above_price(config.price_threshold))
        } else {
            Self::uncached(repository)
        }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Product> {
        match &self.cached {
            Some(cached) => cached.find_by_id(id).await,
            None => self.products.find_by_id(id).await,
        }
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<String> {
        match &self.cached {
            Some(cached) => cached.delete_by_id(id).await,
            None => self.products.delete_by_id(id).await,
        }
    }
}

/// Handler for POST /product
///
/// Creates or updates a product. Does not touch the cache.
pub async fn save_handler(
    State(state): State<AppState>,
    Json(req): Json<ProductRequest>,
) -> Result<Json<Product>> {
    if let Some(error_msg) = req.validate() {
        return Err(ProductError::InvalidRequest(error_msg));
    }

    let product = state.products.save(req).await?;
    Ok(Json(product))
}

/// Handler for GET /product
pub async fn list_handler(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = state.products.find_all().await?;
    Ok(Json(products))
}

/// Handler for GET /product/:id
///
/// Served from the cache region when possible.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>> {
    let product = state.find_by_id(id).await?;
    Ok(Json(product))
}

/// Handler for DELETE /product/:id
///
/// Returns a plain-text confirmation, also when nothing was stored under `id`.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<String> {
    state.delete_by_id(id).await
}

/// Handler for GET /product/cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    match &state.cached {
        Some(cached) => {
            let stats = cached.stats().await;
            Json(StatsResponse::new(cached.region_name().await, true, &stats))
        }
        None => Json(StatsResponse::new(PRODUCT_REGION, false, &CacheStats::new())),
    }
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
