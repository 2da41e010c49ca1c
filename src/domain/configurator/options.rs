//! Option discovery - which values an unset attribute can still take.

use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::domain::catalog::{Attribute, AttributeKind, Facet, Product, WidthRange};

use super::width_bucket::format_bucket;

/// Returns the selectable values for `attribute` across `products`.
///
/// Discrete attributes yield their distinct non-null values; ranged
/// attributes yield the populated buckets from [`range_buckets`].
pub fn available_options(attribute: Attribute, products: &[&Product]) -> Vec<String> {
    match attribute.kind() {
        AttributeKind::Ranged => range_buckets(attribute, products)
            .iter()
            .map(format_bucket)
            .collect(),
        AttributeKind::Discrete => distinct_values(attribute, products),
    }
}

/// Splits the union of all product intervals at every product boundary.
///
/// Consecutive breakpoints form contiguous, non-overlapping buckets; only
/// buckets overlapped by at least one product are kept, so every bucket is
/// guaranteed to select something.
pub fn range_buckets(attribute: Attribute, products: &[&Product]) -> Vec<WidthRange> {
    let ranges: Vec<WidthRange> = products
        .iter()
        .filter_map(|product| match product.facet(attribute) {
            Facet::Range(range) => Some(range),
            Facet::Text(_) | Facet::Count(_) => None,
        })
        .collect();

    let mut breakpoints: Vec<f64> = ranges.iter().flat_map(|r| [r.min, r.max]).collect();
    breakpoints.sort_by(f64::total_cmp);
    breakpoints.dedup();

    breakpoints
        .windows(2)
        .map(|pair| WidthRange::new(pair[0], pair[1]))
        .filter(|bucket| bucket.min < bucket.max)
        .filter(|bucket| ranges.iter().any(|range| range.overlaps(bucket)))
        .collect()
}

fn distinct_values(attribute: Attribute, products: &[&Product]) -> Vec<String> {
    let distinct: BTreeSet<String> = products
        .iter()
        .filter_map(|product| product.discrete_value(attribute).map(Cow::into_owned))
        .collect();
    let mut values: Vec<String> = distinct.into_iter().collect();
    sort_option_values(&mut values);
    values
}

/// Numeric order when every value parses as a number, byte-wise lexical
/// order otherwise.
pub fn sort_option_values(values: &mut [String]) {
    let numeric: Option<Vec<f64>> = values.iter().map(|v| parse_number(v)).collect();
    if numeric.is_some() {
        values.sort_by(|a, b| {
            let (a, b) = (parse_number(a).unwrap_or(0.0), parse_number(b).unwrap_or(0.0));
            a.total_cmp(&b)
        });
    } else {
        values.sort();
    }
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}
