//! Builtin Catalog Source Adapter
//!
//! The storefront's sample door/window catalog, embedded at compile time.
//! Used when no catalog file is configured.

use crate::domain::catalog::Product;
use crate::ports::{CatalogSource, CatalogSourceError};

use super::CatalogFormat;

const BUILTIN_CATALOG: &str = include_str!("../../../data/catalog.json");

/// Embedded sample catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalogSource;

impl BuiltinCatalogSource {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogSource for BuiltinCatalogSource {
    fn describe(&self) -> String {
        "builtin catalog".to_string()
    }

    fn load(&self) -> Result<Vec<Product>, CatalogSourceError> {
        CatalogFormat::Json.parse(&self.describe(), BUILTIN_CATALOG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Catalog, Schema};

    #[test]
    fn test_builtin_catalog_is_valid() {
        let products = BuiltinCatalogSource::new().load().unwrap();
        let catalog = Catalog::new(products, Schema::standard()).unwrap();

        assert_eq!(catalog.len(), 27);
        assert!(catalog
            .products()
            .iter()
            .all(|p| p.slug.starts_with("janelasa/") || p.slug.starts_with("portas/")));
    }

    #[test]
    fn test_builtin_catalog_has_images() {
        let products = BuiltinCatalogSource::new().load().unwrap();
        assert!(products
            .iter()
            .all(|p| p.image.as_deref().is_some_and(|i| i.starts_with("/assets/images/"))));
    }
}
