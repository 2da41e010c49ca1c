//! Catalog Source Port - Interface for loading product records.
//!
//! The catalog is read once at startup and never changes afterwards, so the
//! port is a single synchronous load. Validation happens in
//! [`Catalog::new`](crate::domain::catalog::Catalog::new), not here.

use std::path::PathBuf;

use crate::domain::catalog::Product;

/// Errors that can occur while reading raw product records
#[derive(Debug, thiserror::Error)]
pub enum CatalogSourceError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {origin}: {reason}")]
    Parse { origin: String, reason: String },

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),
}

impl CatalogSourceError {
    pub fn parse(origin: impl Into<String>, reason: impl ToString) -> Self {
        Self::Parse {
            origin: origin.into(),
            reason: reason.to_string(),
        }
    }
}

/// Port for loading the raw product list
pub trait CatalogSource: Send + Sync {
    /// Human-readable origin, used in logs
    fn describe(&self) -> String;

    /// Load every product record
    ///
    /// # Errors
    /// Returns `CatalogSourceError` if the records cannot be read or parsed
    fn load(&self) -> Result<Vec<Product>, CatalogSourceError>;
}
