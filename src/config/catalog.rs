//! Catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::catalog::DEFAULT_PLACEHOLDER_IMAGE;

/// Where the catalog comes from and how product links are built
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// JSON or YAML catalog file; the builtin catalog is used when unset
    pub path: Option<PathBuf>,

    /// Prefix joined with a product slug to form its page URL
    #[serde(default = "default_base_product_url")]
    pub base_product_url: String,

    /// Option picture used when no matching product has an image
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
}

impl CatalogConfig {
    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_product_url.starts_with("https://")
            && !self.base_product_url.starts_with("http://")
        {
            return Err(ValidationError::InvalidBaseProductUrl);
        }
        if self.placeholder_image.trim().is_empty() {
            return Err(ValidationError::MissingRequired("catalog.placeholder_image"));
        }
        if let Some(path) = &self.path {
            let extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .unwrap_or_default()
                .to_ascii_lowercase();
            if !matches!(extension.as_str(), "json" | "yaml" | "yml") {
                return Err(ValidationError::UnsupportedCatalogFormat(extension));
            }
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            base_product_url: default_base_product_url(),
            placeholder_image: default_placeholder_image(),
        }
    }
}

fn default_base_product_url() -> String {
    "https://fabricadoaluminio.com.br/produto/".to_string()
}

fn default_placeholder_image() -> String {
    DEFAULT_PLACEHOLDER_IMAGE.to_string()
}
