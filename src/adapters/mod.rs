//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `catalog` - Catalog sources (file, builtin, in-memory)

pub mod catalog;

pub use catalog::{BuiltinCatalogSource, CatalogFormat, FileCatalogSource, InMemoryCatalogSource};
