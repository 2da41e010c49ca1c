//! Attribute enum representing the seven facets a product is described by.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A product facet tracked by the configurator schema.
///
/// Serialized as its wire key (`categoria`, `persianaMotorizada`, ...), the
/// same key used by catalog files and by the facet extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute {
    #[serde(rename = "categoria")]
    Category,
    #[serde(rename = "sistema")]
    System,
    #[serde(rename = "persiana")]
    Shade,
    #[serde(rename = "persianaMotorizada")]
    ShadeMotorization,
    #[serde(rename = "material")]
    Material,
    #[serde(rename = "largura")]
    Width,
    #[serde(rename = "folhasNumber")]
    LeafCount,
}

/// How an attribute's values are expressed on a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// One concrete (possibly absent) value per product.
    Discrete,
    /// A `[min, max)` interval per product.
    Ranged,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown attribute key: {0}")]
pub struct UnknownAttribute(pub String);

impl Attribute {
    /// Returns the wire key used in catalog files and extractor output.
    pub fn key(&self) -> &'static str {
        match self {
            Attribute::Category => "categoria",
            Attribute::System => "sistema",
            Attribute::Shade => "persiana",
            Attribute::ShadeMotorization => "persianaMotorizada",
            Attribute::Material => "material",
            Attribute::Width => "largura",
            Attribute::LeafCount => "folhasNumber",
        }
    }

    pub fn kind(&self) -> AttributeKind {
        match self {
            Attribute::Width => AttributeKind::Ranged,
            Attribute::Category
            | Attribute::System
            | Attribute::Shade
            | Attribute::ShadeMotorization
            | Attribute::Material
            | Attribute::LeafCount => AttributeKind::Discrete,
        }
    }

    pub fn is_ranged(&self) -> bool {
        self.kind() == AttributeKind::Ranged
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Attribute {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "categoria" => Ok(Attribute::Category),
            "sistema" => Ok(Attribute::System),
            "persiana" => Ok(Attribute::Shade),
            "persianaMotorizada" => Ok(Attribute::ShadeMotorization),
            "material" => Ok(Attribute::Material),
            "largura" => Ok(Attribute::Width),
            "folhasNumber" => Ok(Attribute::LeafCount),
            other => Err(UnknownAttribute(other.to_string())),
        }
    }
}
