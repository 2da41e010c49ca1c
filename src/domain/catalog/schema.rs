//! Schema - question titles and value labels for every attribute.

use std::collections::BTreeMap;

use super::{Attribute, AttributeSequence, ATTRIBUTE_COUNT};

/// Image shown for an option when no remaining product supplies one.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/assets/placeholder.webp";

/// How a raw attribute value becomes a human label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRule {
    /// Look the value up in the label table, falling back to the raw value.
    Lookup,
    /// `"0.7-2"` becomes `"0.7m a 2m"`.
    WidthRange,
    /// `"2"` becomes `"2 Folha(s)"`.
    LeafCount,
}

/// Presentation data for one attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDefinition {
    pub title: String,
    pub labels: BTreeMap<String, String>,
    pub rule: LabelRule,
}

impl AttributeDefinition {
    pub fn lookup(title: impl Into<String>, labels: &[(&str, &str)]) -> Self {
        Self {
            title: title.into(),
            labels: labels
                .iter()
                .map(|(value, label)| (value.to_string(), label.to_string()))
                .collect(),
            rule: LabelRule::Lookup,
        }
    }

    pub fn formatted(title: impl Into<String>, rule: LabelRule) -> Self {
        Self {
            title: title.into(),
            labels: BTreeMap::new(),
            rule,
        }
    }

    /// Derives the label for a raw value. Never fails: unknown values label
    /// themselves.
    pub fn label_for(&self, value: &str) -> String {
        match self.rule {
            LabelRule::Lookup => self
                .labels
                .get(value)
                .cloned()
                .unwrap_or_else(|| value.to_string()),
            LabelRule::WidthRange => format!("{}m", value.replacen('-', "m a ", 1)),
            LabelRule::LeafCount => format!("{} Folha(s)", value),
        }
    }
}

/// Titles and labels for the whole attribute sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    definitions: [AttributeDefinition; ATTRIBUTE_COUNT],
    placeholder_image: String,
}

impl Schema {
    /// Builds a schema from one definition per attribute, in sequence order.
    pub fn new(definitions: [AttributeDefinition; ATTRIBUTE_COUNT]) -> Self {
        Self {
            definitions,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
        }
    }

    /// The storefront's door/window schema.
    pub fn standard() -> Self {
        Self::new([
            AttributeDefinition::lookup(
                "O que você procura?",
                &[("janela", "Janela"), ("porta", "Porta")],
            ),
            AttributeDefinition::lookup(
                "Qual sistema de abertura você prefere?",
                &[
                    ("janela-correr", "Correr"),
                    ("porta-correr", "Correr"),
                    ("maxim-ar", "Maxim-ar"),
                    ("giro", "Giro"),
                ],
            ),
            AttributeDefinition::lookup(
                "Precisa de persiana integrada?",
                &[("sim", "Sim"), ("nao", "Não")],
            ),
            AttributeDefinition::lookup(
                "Persiana motorizada ou manual?",
                &[("motorizada", "Motorizada"), ("manual", "Manual")],
            ),
            AttributeDefinition::lookup(
                "Qual material de preenchimento você deseja?",
                &[
                    ("vidro", "Vidro"),
                    ("vidro + veneziana", "Vidro e Veneziana"),
                    ("lambri", "Lambri"),
                    ("veneziana", "Veneziana"),
                    ("vidro + lambri", "Vidro e Lambri"),
                ],
            ),
            AttributeDefinition::formatted("Qual a largura do vão?", LabelRule::WidthRange),
            AttributeDefinition::formatted(
                "Para este tamanho, qual o número de folhas?",
                LabelRule::LeafCount,
            ),
        ])
    }

    pub fn with_placeholder_image(mut self, placeholder_image: impl Into<String>) -> Self {
        self.placeholder_image = placeholder_image.into();
        self
    }

    pub fn definition(&self, attribute: Attribute) -> &AttributeDefinition {
        &self.definitions[AttributeSequence::order_index(attribute)]
    }

    pub fn title(&self, attribute: Attribute) -> &str {
        &self.definition(attribute).title
    }

    pub fn label(&self, attribute: Attribute, value: &str) -> String {
        self.definition(attribute).label_for(value)
    }

    pub fn placeholder_image(&self) -> &str {
        &self.placeholder_image
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::standard()
    }
}
