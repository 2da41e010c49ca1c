//! Catalog - the validated, immutable product list the engine runs against.

use std::collections::HashSet;
use thiserror::Error;

use super::{Product, Schema};
use crate::domain::foundation::ValidationError;

/// Errors that can occur while assembling a catalog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Product #{index} ('{slug}') is invalid: {source}")]
    InvalidProduct {
        index: usize,
        slug: String,
        #[source]
        source: ValidationError,
    },

    #[error("Duplicate product slug: {0}")]
    DuplicateSlug(String),
}

/// Products plus the schema used to present them.
///
/// Built once and shared read-only; every engine call receives it explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    schema: Schema,
}

impl Catalog {
    /// Validates every product and checks slugs are unique.
    ///
    /// An empty product list is accepted.
    pub fn new(products: Vec<Product>, schema: Schema) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for (index, product) in products.iter().enumerate() {
            product
                .validate()
                .map_err(|source| CatalogError::InvalidProduct {
                    index,
                    slug: product.slug.clone(),
                    source,
                })?;
            if !seen.insert(product.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(product.slug.clone()));
            }
        }
        Ok(Self { products, schema })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::WidthRange;

    fn product(slug: &str) -> Product {
        Product {
            slug: slug.to_string(),
            image: None,
            category: "porta".to_string(),
            system: "giro".to_string(),
            shade: "nao".to_string(),
            shade_motorization: None,
            material: "lambri".to_string(),
            width: WidthRange::new(0.5, 1.0),
            leaf_count: 1,
        }
    }

    #[test]
    fn accepts_valid_products() {
        let catalog = Catalog::new(vec![product("a"), product("b")], Schema::standard()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.find("b").is_some());
        assert!(catalog.find("c").is_none());
    }

    #[test]
    fn accepts_empty_product_list() {
        let catalog = Catalog::new(Vec::new(), Schema::standard()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn rejects_duplicate_slugs() {
        let result = Catalog::new(vec![product("a"), product("a")], Schema::standard());
        assert_eq!(result, Err(CatalogError::DuplicateSlug("a".to_string())));
    }

    #[test]
    fn rejects_invalid_product_with_index() {
        let mut broken = product("broken");
        broken.width = WidthRange::new(1.0, 1.0);

        let err = Catalog::new(vec![product("a"), broken], Schema::standard()).unwrap_err();
        match err {
            CatalogError::InvalidProduct { index, slug, .. } => {
                assert_eq!(index, 1);
                assert_eq!(slug, "broken");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
