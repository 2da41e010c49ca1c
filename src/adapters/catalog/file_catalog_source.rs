//! File-based Catalog Source Adapter
//!
//! Reads product records from a JSON or YAML file on disk. The format is
//! picked from the file extension.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::catalog::Product;
use crate::ports::{CatalogSource, CatalogSourceError};

/// Supported catalog file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Detect the format from a path's extension
    pub fn from_path(path: &Path) -> Result<Self, CatalogSourceError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some(other) => Err(CatalogSourceError::UnsupportedFormat(other.to_string())),
            None => Err(CatalogSourceError::UnsupportedFormat(format!(
                "{} has no extension",
                path.display()
            ))),
        }
    }

    /// Parse product records in this format
    pub fn parse(&self, origin: &str, contents: &str) -> Result<Vec<Product>, CatalogSourceError> {
        match self {
            Self::Json => serde_json::from_str(contents)
                .map_err(|e| CatalogSourceError::parse(origin, e)),
            Self::Yaml => serde_yaml::from_str(contents)
                .map_err(|e| CatalogSourceError::parse(origin, e)),
        }
    }
}

/// Catalog stored in a single file
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    /// Create a source for the given file
    ///
    /// # Example
    /// ```ignore
    /// let source = FileCatalogSource::new("./data/catalog.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalogSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<Product>, CatalogSourceError> {
        let format = CatalogFormat::from_path(&self.path)?;

        let contents = fs::read_to_string(&self.path).map_err(|source| CatalogSourceError::Io {
            path: self.path.clone(),
            source,
        })?;

        let products = format.parse(&self.describe(), &contents)?;
        debug!(path = %self.path.display(), count = products.len(), "Catalog file loaded");
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, TempDir};

    const JSON_CATALOG: &str = r#"[
        {"slug": "janelasa/a.php", "image": "/a.webp", "categoria": "janela",
         "sistema": "maxim-ar", "persiana": "nao", "persianaMotorizada": null,
         "material": "vidro", "minLargura": 0.4, "maxLargura": 1, "folhasNumber": 1}
    ]"#;

    const YAML_CATALOG: &str = r#"
- slug: portas/b.php
  categoria: porta
  sistema: giro
  persiana: nao
  material: lambri
  minLargura: 0.5
  maxLargura: 1.0
  folhasNumber: 1
- slug: portas/c.php
  image: /c.webp
  categoria: porta
  sistema: porta-correr
  persiana: sim
  persianaMotorizada: manual
  material: vidro
  minLargura: 0.8
  maxLargura: 2.5
  folhasNumber: 2
"#;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_loads_json_catalog() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "catalog.json", JSON_CATALOG);

        let products = FileCatalogSource::new(&path).load().unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].slug, "janelasa/a.php");
        assert_eq!(products[0].shade_motorization, None);
    }

    #[test]
    fn test_loads_yaml_catalog() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "catalog.yml", YAML_CATALOG);

        let products = FileCatalogSource::new(&path).load().unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].image, None);
        assert_eq!(products[1].shade_motorization.as_deref(), Some("manual"));
        assert_eq!(products[1].width.max, 2.5);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let source = FileCatalogSource::new(dir.path().join("missing.json"));

        let err = source.load().unwrap_err();

        assert!(matches!(err, CatalogSourceError::Io { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(b"[{\"slug\": ").unwrap();

        let err = FileCatalogSource::new(file.path()).load().unwrap_err();

        assert!(matches!(err, CatalogSourceError::Parse { .. }));
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "catalog.csv", "slug,categoria");

        let err = FileCatalogSource::new(&path).load().unwrap_err();

        assert!(matches!(err, CatalogSourceError::UnsupportedFormat(ext) if ext == "csv"));
    }

    #[test]
    fn test_format_detection_is_case_insensitive() {
        assert_eq!(
            CatalogFormat::from_path(Path::new("a/CATALOG.JSON")).unwrap(),
            CatalogFormat::Json
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("catalog.yaml")).unwrap(),
            CatalogFormat::Yaml
        );
        assert!(CatalogFormat::from_path(Path::new("catalog")).is_err());
    }
}
