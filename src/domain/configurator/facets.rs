//! Extracted facets - merging natural-language extractor output.
//!
//! The extractor replies with a JSON object holding one key per attribute
//! (value or null) plus an optional `knowledgeBaseAnswer`. Only
//! recognized, non-null values survive parsing; everything else is
//! dropped here so it never reaches the engine.

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::domain::catalog::Attribute;

use super::width_bucket::{parse_bucket, point_bucket};

/// Key carrying the extractor's free-text answer to a factual question.
pub const KNOWLEDGE_BASE_ANSWER_KEY: &str = "knowledgeBaseAnswer";

/// Errors that can occur while reading an extractor reply.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("JSON parse error: {0}")]
    ParseError(String),

    #[error("Expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Recognized attribute values from one extractor reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFacets {
    values: BTreeMap<Attribute, String>,
    knowledge_base_answer: Option<String>,
}

impl ExtractedFacets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, attribute: Attribute, value: impl Into<String>) -> Self {
        self.values.insert(attribute, value.into());
        self
    }

    pub fn with_knowledge_base_answer(mut self, answer: impl Into<String>) -> Self {
        self.knowledge_base_answer = Some(answer.into());
        self
    }

    /// Reads a parsed extractor object, dropping unknown keys and null
    /// markers.
    pub fn from_value(value: &Value) -> Result<Self, ExtractionError> {
        let object = value
            .as_object()
            .ok_or_else(|| ExtractionError::NotAnObject(json_type_name(value)))?;

        let mut facets = Self::new();
        for (key, raw) in object {
            if key == KNOWLEDGE_BASE_ANSWER_KEY {
                facets.knowledge_base_answer = normalize_text(raw);
                continue;
            }
            let attribute = match key.parse::<Attribute>() {
                Ok(attribute) => attribute,
                Err(_) => {
                    debug!(key = %key, "Dropping unrecognized facet key");
                    continue;
                }
            };
            match normalize_value(attribute, raw) {
                Some(value) => {
                    facets.values.insert(attribute, value);
                }
                None => debug!(attribute = %attribute, "Ignoring empty facet value"),
            }
        }
        Ok(facets)
    }

    pub fn get(&self, attribute: Attribute) -> Option<&str> {
        self.values.get(&attribute).map(String::as_str)
    }

    pub fn contains(&self, attribute: Attribute) -> bool {
        self.values.contains_key(&attribute)
    }

    /// Recognized values in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &str)> + '_ {
        self.values
            .iter()
            .map(|(attribute, value)| (*attribute, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn knowledge_base_answer(&self) -> Option<&str> {
        self.knowledge_base_answer.as_deref()
    }
}

fn normalize_text(raw: &Value) -> Option<String> {
    let text = raw.as_str()?.trim();
    if text.is_empty() || text.eq_ignore_ascii_case("null") {
        None
    } else {
        Some(text.to_string())
    }
}

fn normalize_value(attribute: Attribute, raw: &Value) -> Option<String> {
    match raw {
        Value::String(_) => {
            let text = normalize_text(raw)?;
            if attribute.is_ranged() && parse_bucket(&text).is_none() {
                if let Ok(width) = text.replace(',', ".").parse::<f64>() {
                    return Some(point_bucket(width));
                }
            }
            Some(text)
        }
        Value::Number(n) => {
            if attribute.is_ranged() {
                n.as_f64().map(point_bucket)
            } else {
                n.as_u64()
                    .map(|u| u.to_string())
                    .or_else(|| n.as_f64().map(|f| f.to_string()))
            }
        }
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Pulls the facet object out of a raw extractor reply.
#[derive(Debug, Clone, Default)]
pub struct FacetExtractor;

impl FacetExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extracts facets from an extractor reply.
    ///
    /// # Steps
    /// 1. Locate the JSON (markdown code block, or first balanced object)
    /// 2. Parse JSON
    /// 3. Keep recognized, non-null attribute values
    pub fn extract(&self, reply: &str) -> Result<ExtractedFacets, ExtractionError> {
        let json_str = self.extract_json_from_reply(reply);
        let value: Value = serde_json::from_str(&json_str)
            .map_err(|e| ExtractionError::ParseError(e.to_string()))?;
        ExtractedFacets::from_value(&value)
    }

    fn extract_json_from_reply(&self, reply: &str) -> String {
        let trimmed = reply.trim();

        if let Some(json) = self.extract_from_code_block(trimmed) {
            return json;
        }

        if let Some(start) = trimmed.find('{') {
            if let Some(json) = self.extract_balanced_object(trimmed, start) {
                return json;
            }
        }

        // Let the JSON parser report what is wrong
        trimmed.to_string()
    }

    fn extract_from_code_block(&self, s: &str) -> Option<String> {
        let patterns = ["```json\n", "```json\r\n", "```\n", "```\r\n"];

        for pattern in patterns {
            if let Some(start) = s.find(pattern) {
                let json_start = start + pattern.len();
                if let Some(end) = s[json_start..].find("```") {
                    return Some(s[json_start..json_start + end].trim().to_string());
                }
            }
        }
        None
    }

    fn extract_balanced_object(&self, s: &str, start: usize) -> Option<String> {
        let mut depth = 0usize;
        let mut in_string = false;
        let mut escape_next = false;

        for (offset, c) in s[start..].char_indices() {
            if escape_next {
                escape_next = false;
                continue;
            }

            match c {
                '\\' if in_string => escape_next = true,
                '"' => in_string = !in_string,
                _ if in_string => {}
                '{' => depth += 1,
                '}' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return Some(s[start..start + offset + 1].to_string());
                    }
                }
                _ => {}
            }
        }
        None
    }
}
