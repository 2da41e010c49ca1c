//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Base product URL must start with http:// or https://")]
    InvalidBaseProductUrl,

    #[error("Unsupported catalog file extension: {0}")]
    UnsupportedCatalogFormat(String),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
