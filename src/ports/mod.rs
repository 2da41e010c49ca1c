//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CatalogSource` - Where the product records come from

mod catalog_source;

pub use catalog_source::{CatalogSource, CatalogSourceError};
