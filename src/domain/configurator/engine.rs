//! Decision engine - computes the next question or the final product set.
//!
//! `compute_next_state` is a pure function of the selections snapshot and
//! the catalog. It keeps no state between calls: every call filters from
//! scratch, walks the attribute sequence, skips attributes with no options,
//! silently fixes attributes with exactly one option, and stops at the first
//! attribute that still offers a real choice.

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::catalog::{Attribute, AttributeSequence, Catalog, Product, Schema};

use super::filter::{filter_products, matches_value};
use super::options::available_options;
use super::Selections;

/// One clickable answer to a question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionOption {
    pub label: String,
    pub value: String,
    /// Representative image for the option.
    pub picture: String,
}

/// The next question to present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionState {
    pub attribute: Attribute,
    pub question: String,
    pub options: Vec<QuestionOption>,
}

/// Outcome of one engine call: either a question or the final products.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EngineResult {
    Question(QuestionState),
    /// Zero products signals an unsatisfiable combination, several signals
    /// products tied on every attribute.
    Complete { products: Vec<Product> },
}

impl EngineResult {
    pub fn question(&self) -> Option<&QuestionState> {
        match self {
            EngineResult::Question(question) => Some(question),
            EngineResult::Complete { .. } => None,
        }
    }

    pub fn products(&self) -> Option<&[Product]> {
        match self {
            EngineResult::Question(_) => None,
            EngineResult::Complete { products } => Some(products),
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, EngineResult::Complete { .. })
    }

    fn complete(products: &[&Product]) -> Self {
        EngineResult::Complete {
            products: products.iter().map(|p| (*p).clone()).collect(),
        }
    }
}

/// Computes the next configurator state.
///
/// # Algorithm
/// 1. Filter the catalog by the set attributes; one product left ends the
///    flow, zero products ends it with an empty result.
/// 2. Walk the attributes in sequence order, skipping set ones:
///    - no options: skip for this call, leave unset
///    - one option: auto-select into a working copy, re-filter, stop if a
///      single product remains
///    - several options: ask this question
/// 3. If every attribute is exhausted, return the remaining products.
///
/// Terminates after at most one pass over the attribute sequence.
pub fn compute_next_state(selections: &Selections, catalog: &Catalog) -> EngineResult {
    let mut working = selections.clone();
    let mut products = filter_products(&working, catalog.products());

    match products.as_slice() {
        [] => {
            warn!(selected = working.set_count(), "No products match the current selections");
            return EngineResult::complete(&products);
        }
        [only] => {
            debug!(slug = %only.slug, "Final product found");
            return EngineResult::complete(&products);
        }
        _ => {}
    }

    for &attribute in AttributeSequence::all() {
        if working.is_set(attribute) {
            continue;
        }

        let mut options = available_options(attribute, &products);
        match options.len() {
            0 => {
                debug!(attribute = %attribute, "Skipping attribute with no options left");
            }
            1 => {
                let value = options.remove(0);
                debug!(attribute = %attribute, value = %value, "Auto-selecting only remaining option");
                working.set(attribute, value);
                products = filter_products(&working, catalog.products());
                if let [only] = products.as_slice() {
                    debug!(slug = %only.slug, "Final product found after auto-select");
                    return EngineResult::complete(&products);
                }
            }
            _ => {
                debug!(attribute = %attribute, options = options.len(), "Asking question");
                return EngineResult::Question(build_question(
                    attribute,
                    options,
                    &products,
                    catalog.schema(),
                ));
            }
        }
    }

    debug!(remaining = products.len(), "Every attribute resolved");
    EngineResult::complete(&products)
}

fn build_question(
    attribute: Attribute,
    values: Vec<String>,
    products: &[&Product],
    schema: &Schema,
) -> QuestionState {
    let options = values
        .into_iter()
        .map(|value| {
            let picture = representative_image(attribute, &value, products)
                .unwrap_or_else(|| schema.placeholder_image().to_string());
            QuestionOption {
                label: schema.label(attribute, &value),
                value,
                picture,
            }
        })
        .collect();

    QuestionState {
        attribute,
        question: schema.title(attribute).to_string(),
        options,
    }
}

/// Image of the first remaining product carrying `value` that has one.
fn representative_image(attribute: Attribute, value: &str, products: &[&Product]) -> Option<String> {
    products
        .iter()
        .filter(|product| matches_value(product, attribute, value))
        .find_map(|product| product.image.as_deref().filter(|image| !image.is_empty()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{WidthRange, DEFAULT_PLACEHOLDER_IMAGE};

    fn product(
        slug: &str,
        category: &str,
        system: &str,
        material: &str,
        (min, max): (f64, f64),
        leaves: u32,
    ) -> Product {
        Product {
            slug: slug.to_string(),
            image: Some(format!("/img/{slug}.webp")),
            category: category.to_string(),
            system: system.to_string(),
            shade: "nao".to_string(),
            shade_motorization: None,
            material: material.to_string(),
            width: WidthRange::new(min, max),
            leaf_count: leaves,
        }
    }

    fn catalog(products: Vec<Product>) -> Catalog {
        Catalog::new(products, Schema::standard()).unwrap()
    }

    fn small_catalog() -> Catalog {
        catalog(vec![
            product("j1", "janela", "maxim-ar", "vidro", (0.4, 1.0), 1),
            product("j2", "janela", "maxim-ar", "vidro", (0.8, 2.0), 2),
            product("p1", "porta", "giro", "lambri", (0.5, 1.0), 1),
            product("p2", "porta", "giro", "veneziana", (0.5, 1.0), 1),
        ])
    }

    #[test]
    fn empty_selections_ask_first_discriminating_attribute() {
        let result = compute_next_state(&Selections::new(), &small_catalog());
        let question = result.question().unwrap();
        assert_eq!(question.attribute, Attribute::Category);
        assert_eq!(question.question, "O que você procura?");
        let labels: Vec<_> = question.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Janela", "Porta"]);
    }

    #[test]
    fn auto_selects_and_skips_to_next_real_choice() {
        let selections = Selections::new().with(Attribute::Category, "janela");
        let result = compute_next_state(&selections, &small_catalog());

        // system and material are single-valued, shade motorization has no values
        let question = result.question().unwrap();
        assert_eq!(question.attribute, Attribute::Width);
        let values: Vec<_> = question.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["0.4-0.8", "0.8-1", "1-2"]);
        assert_eq!(question.options[0].label, "0.4m a 0.8m");
    }

    #[test]
    fn auto_select_cascade_reaches_final_product() {
        let selections = Selections::new()
            .with(Attribute::Category, "janela")
            .with(Attribute::Width, "1-2");
        let result = compute_next_state(&selections, &small_catalog());
        let products = result.products().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].slug, "j2");
    }

    #[test]
    fn singleton_filter_returns_without_question() {
        let selections = Selections::new().with(Attribute::Material, "lambri");
        let result = compute_next_state(&selections, &small_catalog());
        assert_eq!(result.products().unwrap()[0].slug, "p1");
    }

    #[test]
    fn contradiction_returns_empty_final_result() {
        let selections = Selections::new()
            .with(Attribute::Category, "porta")
            .with(Attribute::System, "maxim-ar");
        let result = compute_next_state(&selections, &small_catalog());
        assert_eq!(result, EngineResult::Complete { products: vec![] });
    }

    #[test]
    fn fully_tied_products_are_all_returned() {
        let mut twin = product("twin", "porta", "giro", "lambri", (0.5, 1.0), 1);
        twin.image = None;
        let catalog = catalog(vec![
            product("original", "porta", "giro", "lambri", (0.5, 1.0), 1),
            twin,
        ]);

        let result = compute_next_state(&Selections::new(), &catalog);
        let slugs: Vec<_> = result.products().unwrap().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["original", "twin"]);
    }

    #[test]
    fn empty_catalog_completes_with_nothing() {
        let result = compute_next_state(&Selections::new(), &catalog(vec![]));
        assert_eq!(result.products(), Some(&[][..]));
    }

    #[test]
    fn option_picture_falls_back_to_placeholder() {
        let mut a = product("a", "janela", "maxim-ar", "vidro", (0.4, 1.0), 1);
        let mut b = product("b", "porta", "giro", "vidro", (0.4, 1.0), 1);
        a.image = None;
        b.image = Some(String::new());
        let result = compute_next_state(&Selections::new(), &catalog(vec![a, b]));
        let question = result.question().unwrap();
        assert!(question
            .options
            .iter()
            .all(|o| o.picture == DEFAULT_PLACEHOLDER_IMAGE));
    }

    #[test]
    fn option_picture_comes_from_first_matching_product() {
        let result = compute_next_state(&Selections::new(), &small_catalog());
        let question = result.question().unwrap();
        assert_eq!(question.options[0].picture, "/img/j1.webp");
        assert_eq!(question.options[1].picture, "/img/p1.webp");
    }

    #[test]
    fn caller_selections_are_not_modified() {
        let selections = Selections::new().with(Attribute::Category, "janela");
        let before = selections.clone();
        let _ = compute_next_state(&selections, &small_catalog());
        assert_eq!(selections, before);
    }

    #[test]
    fn result_serializes_with_kind_tag() {
        let result = compute_next_state(&Selections::new(), &small_catalog());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["kind"], "question");
        assert_eq!(json["attribute"], "categoria");

        let done = EngineResult::Complete { products: vec![] };
        let json = serde_json::to_value(&done).unwrap();
        assert_eq!(json["kind"], "complete");
        assert!(json["products"].as_array().unwrap().is_empty());
    }
}
