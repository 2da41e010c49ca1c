//! Selections - the Master List of configurator progress.
//!
//! Holds one slot per schema attribute at all times. A slot is either unset
//! or a chosen value. Changing an attribute through [`Selections::select`]
//! or [`Selections::merge_facets`] resets everything downstream of it so
//! stale answers never survive an upstream change.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::catalog::{Attribute, AttributeSequence, Product, ATTRIBUTE_COUNT};

use super::width_bucket::format_bucket;
use super::ExtractedFacets;

/// Attribute → chosen value or unset, for every attribute in the schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Selections {
    values: [Option<String>; ATTRIBUTE_COUNT],
}

impl Selections {
    /// All attributes unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every attribute of `product` filled in, width as the product's own
    /// interval. Useful for naming a resolved product.
    pub fn describing(product: &Product) -> Self {
        let mut selections = Self::new();
        for &attribute in AttributeSequence::all() {
            if attribute.is_ranged() {
                selections.set(attribute, format_bucket(&product.width));
            } else if let Some(value) = product.discrete_value(attribute) {
                selections.set(attribute, value.into_owned());
            }
        }
        selections
    }

    /// Builder form of [`Selections::set`].
    pub fn with(mut self, attribute: Attribute, value: impl Into<String>) -> Self {
        self.set(attribute, value);
        self
    }

    pub fn get(&self, attribute: Attribute) -> Option<&str> {
        self.values[AttributeSequence::order_index(attribute)].as_deref()
    }

    pub fn is_set(&self, attribute: Attribute) -> bool {
        self.get(attribute).is_some()
    }

    /// Sets a value without touching other attributes.
    pub fn set(&mut self, attribute: Attribute, value: impl Into<String>) {
        self.values[AttributeSequence::order_index(attribute)] = Some(value.into());
    }

    pub fn clear(&mut self, attribute: Attribute) {
        self.values[AttributeSequence::order_index(attribute)] = None;
    }

    /// Sets a value as a user choice.
    ///
    /// When the value actually changes, every attribute after `attribute`
    /// in schema order is reset. Returns whether anything changed.
    pub fn select(&mut self, attribute: Attribute, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.get(attribute) == Some(value.as_str()) {
            return false;
        }
        self.set(attribute, value);
        for &downstream in AttributeSequence::attributes_after(attribute) {
            self.clear(downstream);
        }
        true
    }

    /// Merges a batch of extracted facets.
    ///
    /// Attributes downstream of the earliest changed attribute are reset
    /// unless the batch supplies them too. Returns the attributes whose
    /// value changed, in schema order.
    pub fn merge_facets(&mut self, facets: &ExtractedFacets) -> Vec<Attribute> {
        let changed: Vec<Attribute> = facets
            .iter()
            .filter(|(attribute, value)| self.get(*attribute) != Some(*value))
            .map(|(attribute, _)| attribute)
            .collect();

        if let Some(&earliest) = changed.first() {
            for &downstream in AttributeSequence::attributes_after(earliest) {
                if !facets.contains(downstream) {
                    self.clear(downstream);
                }
            }
        }

        for (attribute, value) in facets.iter() {
            self.set(attribute, value);
        }
        changed
    }

    /// Back to all-unset.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// All attributes in schema order with their current value.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, Option<&str>)> + '_ {
        AttributeSequence::all()
            .iter()
            .map(move |&attribute| (attribute, self.get(attribute)))
    }

    /// Only the set attributes, in schema order.
    pub fn set_entries(&self) -> impl Iterator<Item = (Attribute, &str)> + '_ {
        self.iter()
            .filter_map(|(attribute, value)| value.map(|v| (attribute, v)))
    }

    pub fn set_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.set_count() == 0
    }
}

impl Serialize for Selections {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ATTRIBUTE_COUNT))?;
        for (attribute, value) in self.iter() {
            map.serialize_entry(attribute.key(), &value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::WidthRange;

    #[test]
    fn new_has_every_attribute_unset() {
        let selections = Selections::new();
        assert_eq!(selections.iter().count(), ATTRIBUTE_COUNT);
        assert!(selections.iter().all(|(_, value)| value.is_none()));
        assert!(selections.is_empty());
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut selections = Selections::new();
        selections.set(Attribute::Material, "vidro");
        assert_eq!(selections.get(Attribute::Material), Some("vidro"));
        assert!(selections.is_set(Attribute::Material));
        assert_eq!(selections.set_count(), 1);
    }

    #[test]
    fn set_entries_follow_schema_order() {
        let selections = Selections::new()
            .with(Attribute::LeafCount, "2")
            .with(Attribute::Category, "janela");
        let entries: Vec<_> = selections.set_entries().collect();
        assert_eq!(
            entries,
            vec![(Attribute::Category, "janela"), (Attribute::LeafCount, "2")]
        );
    }

    #[test]
    fn select_resets_downstream_attributes() {
        let mut selections = Selections::new()
            .with(Attribute::Category, "janela")
            .with(Attribute::System, "janela-correr")
            .with(Attribute::Material, "vidro")
            .with(Attribute::LeafCount, "2");

        assert!(selections.select(Attribute::System, "maxim-ar"));

        assert_eq!(selections.get(Attribute::Category), Some("janela"));
        assert_eq!(selections.get(Attribute::System), Some("maxim-ar"));
        assert_eq!(selections.get(Attribute::Material), None);
        assert_eq!(selections.get(Attribute::LeafCount), None);
    }

    #[test]
    fn reselecting_same_value_keeps_downstream() {
        let mut selections = Selections::new()
            .with(Attribute::Category, "porta")
            .with(Attribute::Material, "lambri");

        assert!(!selections.select(Attribute::Category, "porta"));
        assert_eq!(selections.get(Attribute::Material), Some("lambri"));
    }

    #[test]
    fn merge_facets_sets_values_and_resets_stale_downstream() {
        let mut selections = Selections::new()
            .with(Attribute::Category, "janela")
            .with(Attribute::System, "janela-correr")
            .with(Attribute::Material, "vidro");

        let facets = ExtractedFacets::new()
            .with(Attribute::Category, "porta")
            .with(Attribute::System, "giro");

        let changed = selections.merge_facets(&facets);

        assert_eq!(changed, vec![Attribute::Category, Attribute::System]);
        assert_eq!(selections.get(Attribute::Category), Some("porta"));
        assert_eq!(selections.get(Attribute::System), Some("giro"));
        assert_eq!(selections.get(Attribute::Material), None);
    }

    #[test]
    fn merge_facets_keeps_upstream_and_unchanged_batches() {
        let mut selections = Selections::new()
            .with(Attribute::Category, "porta")
            .with(Attribute::Material, "lambri");

        let same = ExtractedFacets::new().with(Attribute::Category, "porta");
        assert!(selections.merge_facets(&same).is_empty());
        assert_eq!(selections.get(Attribute::Material), Some("lambri"));

        let downstream = ExtractedFacets::new().with(Attribute::LeafCount, "2");
        assert_eq!(selections.merge_facets(&downstream), vec![Attribute::LeafCount]);
        assert_eq!(selections.get(Attribute::Category), Some("porta"));
        assert_eq!(selections.get(Attribute::Material), Some("lambri"));
    }

    #[test]
    fn reset_clears_everything() {
        let mut selections = Selections::new().with(Attribute::Shade, "sim");
        selections.reset();
        assert_eq!(selections, Selections::new());
    }

    #[test]
    fn describing_fills_every_defined_attribute() {
        let product = Product {
            slug: "p".to_string(),
            image: None,
            category: "janela".to_string(),
            system: "maxim-ar".to_string(),
            shade: "nao".to_string(),
            shade_motorization: None,
            material: "vidro".to_string(),
            width: WidthRange::new(0.4, 1.0),
            leaf_count: 1,
        };

        let selections = Selections::describing(&product);
        assert_eq!(selections.get(Attribute::ShadeMotorization), None);
        assert_eq!(selections.get(Attribute::Width), Some("0.4-1"));
        assert_eq!(selections.get(Attribute::LeafCount), Some("1"));
        assert_eq!(selections.set_count(), ATTRIBUTE_COUNT - 1);
    }

    #[test]
    fn serializes_as_full_map_with_nulls() {
        let selections = Selections::new().with(Attribute::Category, "janela");
        let json = serde_json::to_value(&selections).unwrap();
        assert_eq!(json["categoria"], "janela");
        assert!(json["persianaMotorizada"].is_null());
        assert_eq!(json.as_object().unwrap().len(), ATTRIBUTE_COUNT);
    }
}
