//! Filtering primitive - keeps the products consistent with every set attribute.

use crate::domain::catalog::{Attribute, Facet, Product};

use super::width_bucket::parse_bucket;
use super::Selections;

/// Returns the products matching every set attribute, in catalog order.
///
/// Unset attributes impose no constraint.
pub fn filter_products<'a>(selections: &Selections, products: &'a [Product]) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| matches_selections(product, selections))
        .collect()
}

/// True when `product` is consistent with every set attribute.
pub fn matches_selections(product: &Product, selections: &Selections) -> bool {
    selections
        .set_entries()
        .all(|(attribute, selected)| matches_value(product, attribute, selected))
}

/// True when `product` matches a single selected value.
///
/// Ranged attributes match by half-open interval overlap, or by containment
/// when the selection is a single measured width, and fail open on an
/// unparseable selection. Discrete attributes need the product to define
/// the attribute and its stringified value to equal the selection exactly.
pub fn matches_value(product: &Product, attribute: Attribute, selected: &str) -> bool {
    match product.facet(attribute) {
        Facet::Range(range) => match parse_bucket(selected) {
            Some(selection) if selection.is_point() => range.contains(selection.min),
            Some(selection) => range.overlaps(&selection),
            None => true,
        },
        facet => facet
            .discrete_value()
            .is_some_and(|value| value == selected),
    }
}
