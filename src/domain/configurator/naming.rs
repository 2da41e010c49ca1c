//! Running display name built from the current selections.

use crate::domain::catalog::{Attribute, Schema};

use super::Selections;

/// Label used when a shade is present, instead of the "Sim" answer label.
pub const SHADE_PRESENT_LABEL: &str = "Persiana";

const SHADE_PRESENT: &str = "sim";
const SHADE_ABSENT: &str = "nao";

/// Labels of every set attribute, in schema order.
///
/// Shade gets special treatment: presence contributes
/// [`SHADE_PRESENT_LABEL`], absence contributes nothing.
pub fn breadcrumb(selections: &Selections, schema: &Schema) -> Vec<String> {
    selections
        .set_entries()
        .filter_map(|(attribute, value)| match (attribute, value) {
            (Attribute::Shade, SHADE_ABSENT) => None,
            (Attribute::Shade, SHADE_PRESENT) => Some(SHADE_PRESENT_LABEL.to_string()),
            _ => Some(schema.label(attribute, value)),
        })
        .collect()
}

pub fn display_name(selections: &Selections, schema: &Schema) -> String {
    breadcrumb(selections, schema).join(" ")
}
