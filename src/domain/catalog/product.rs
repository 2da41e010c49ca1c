//! Product - immutable catalog record.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::Attribute;
use crate::domain::foundation::ValidationError;

/// A width interval in metres, `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidthRange {
    #[serde(rename = "minLargura")]
    pub min: f64,
    #[serde(rename = "maxLargura")]
    pub max: f64,
}

impl WidthRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Strict half-open intersection: `self.min < other.max && other.min < self.max`.
    pub fn overlaps(&self, other: &WidthRange) -> bool {
        self.min < other.max && other.min < self.max
    }

    /// Half-open containment: `min <= width < max`.
    pub fn contains(&self, width: f64) -> bool {
        self.min <= width && width < self.max
    }

    /// True for a single measured width written as a range (`min == max`).
    pub fn is_point(&self) -> bool {
        self.min == self.max
    }

    /// Checks the bounds are finite and non-empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.min.is_finite() {
            return Err(ValidationError::not_finite("minLargura", self.min));
        }
        if !self.max.is_finite() {
            return Err(ValidationError::not_finite("maxLargura", self.max));
        }
        if self.min >= self.max {
            return Err(ValidationError::invalid_range("largura", self.min, self.max));
        }
        Ok(())
    }
}

/// The value a product carries for one attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Facet<'a> {
    /// Free-text value; `None` when the product does not define it.
    Text(Option<&'a str>),
    /// Integer value (leaf count).
    Count(u32),
    /// Interval value (width).
    Range(WidthRange),
}

impl<'a> Facet<'a> {
    /// Stringified discrete value, the form selections are compared against.
    ///
    /// Ranges and absent values have no discrete form.
    pub fn discrete_value(&self) -> Option<Cow<'a, str>> {
        match *self {
            Facet::Text(value) => value.map(Cow::Borrowed),
            Facet::Count(n) => Some(Cow::Owned(n.to_string())),
            Facet::Range(_) => None,
        }
    }
}

/// A door or window in the catalog.
///
/// Field names on the wire follow the catalog file format
/// (`categoria`, `minLargura`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stable identifier; also the path of the product page.
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "sistema")]
    pub system: String,
    #[serde(rename = "persiana")]
    pub shade: String,
    /// Absent when the product has no shade.
    #[serde(rename = "persianaMotorizada", default)]
    pub shade_motorization: Option<String>,
    pub material: String,
    #[serde(flatten)]
    pub width: WidthRange,
    #[serde(rename = "folhasNumber")]
    pub leaf_count: u32,
}

impl Product {
    /// Returns this product's value for `attribute`.
    pub fn facet(&self, attribute: Attribute) -> Facet<'_> {
        match attribute {
            Attribute::Category => Facet::Text(Some(&self.category)),
            Attribute::System => Facet::Text(Some(&self.system)),
            Attribute::Shade => Facet::Text(Some(&self.shade)),
            Attribute::ShadeMotorization => Facet::Text(self.shade_motorization.as_deref()),
            Attribute::Material => Facet::Text(Some(&self.material)),
            Attribute::Width => Facet::Range(self.width),
            Attribute::LeafCount => Facet::Count(self.leaf_count),
        }
    }

    /// Shorthand for `self.facet(attribute).discrete_value()`.
    pub fn discrete_value(&self, attribute: Attribute) -> Option<Cow<'_, str>> {
        self.facet(attribute).discrete_value()
    }

    /// Full product page URL for the given base.
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base, self.slug)
    }

    /// Validates the record's own fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.slug.trim().is_empty() {
            return Err(ValidationError::empty_field("slug"));
        }
        let text_fields = [
            ("categoria", &self.category),
            ("sistema", &self.system),
            ("persiana", &self.shade),
            ("material", &self.material),
        ];
        for (field, value) in text_fields {
            if value.trim().is_empty() {
                return Err(ValidationError::empty_field(field));
            }
        }
        if let Some(motorization) = &self.shade_motorization {
            if motorization.trim().is_empty() {
                return Err(ValidationError::empty_field("persianaMotorizada"));
            }
        }
        if self.leaf_count == 0 {
            return Err(ValidationError::invalid_format(
                "folhasNumber",
                "must be at least 1",
            ));
        }
        self.width.validate()
    }
}
