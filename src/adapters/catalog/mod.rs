//! Catalog Adapters
//!
//! Implementations of the CatalogSource port.
//!
//! ## Available Adapters
//!
//! - **FileCatalogSource** - Reads a JSON or YAML file from disk
//! - **BuiltinCatalogSource** - The sample catalog compiled into the binary
//! - **InMemoryCatalogSource** - A fixed product list (testing/embedding)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::catalog::{BuiltinCatalogSource, FileCatalogSource};
//!
//! // Production: file-based catalog
//! let source = FileCatalogSource::new("./data/catalog.yaml");
//!
//! // Development: embedded sample
//! let source = BuiltinCatalogSource::new();
//! ```

mod builtin_catalog_source;
mod file_catalog_source;
mod in_memory_catalog_source;

pub use builtin_catalog_source::BuiltinCatalogSource;
pub use file_catalog_source::{CatalogFormat, FileCatalogSource};
pub use in_memory_catalog_source::InMemoryCatalogSource;
