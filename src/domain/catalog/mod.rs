//! Catalog domain module.
//!
//! The immutable product data the configurator narrows: the attribute
//! vocabulary and its fixed order, presentation labels, product records
//! and the validated catalog that bundles them.

mod attribute;
mod attribute_sequence;
#[allow(clippy::module_inception)]
mod catalog;
mod product;
mod schema;

pub use attribute::{Attribute, AttributeKind, UnknownAttribute};
pub use attribute_sequence::{AttributeSequence, ATTRIBUTE_COUNT};
pub use catalog::{Catalog, CatalogError};
pub use product::{Facet, Product, WidthRange};
pub use schema::{AttributeDefinition, LabelRule, Schema, DEFAULT_PLACEHOLDER_IMAGE};
