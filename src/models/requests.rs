//! Request DTOs for the product service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for the save operation (POST /product)
///
/// # Fields
/// - `id`: Optional identifier; storage assigns one when absent
/// - `name`: Product name
/// - `price`: Product price
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRequest {
    /// Identifier to upsert under
    #[serde(default)]
    pub id: Option<i64>,
    /// Product name
    pub name: String,
    /// Product price
    pub price: f64,
}

impl ProductRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if matches!(self.id, Some(id) if id <= 0) {
            return Some("Product id must be positive".to_string());
        }
        if self.name.trim().is_empty() {
            return Some("Product name cannot be empty".to_string());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Some("Product price must be a non-negative number".to_string());
        }
        None
    }
}
