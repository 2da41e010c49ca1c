//! In-Memory Catalog Source Adapter
//!
//! Serves a fixed product list. Useful for testing and for embedding
//! callers that build their catalog programmatically.

use crate::domain::catalog::Product;
use crate::ports::{CatalogSource, CatalogSourceError};

/// Catalog held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogSource {
    products: Vec<Product>,
}

impl InMemoryCatalogSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Number of stored products
    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

impl CatalogSource for InMemoryCatalogSource {
    fn describe(&self) -> String {
        format!("in-memory catalog ({} products)", self.products.len())
    }

    fn load(&self) -> Result<Vec<Product>, CatalogSourceError> {
        Ok(self.products.clone())
    }
}
