//! Cache Module
//!
//! Provides the "Product" cache region used for read-through lookups, its
//! statistics, and the policy deciding which results are cached.

mod policy;
mod region;
mod stats;

// Re-export public types
pub use policy::CachePolicy;
pub use region::CacheRegion;
pub use stats::CacheStats;

// == Public Constants ==
/// Name of the region holding Product records
pub const PRODUCT_REGION: &str = "Product";
