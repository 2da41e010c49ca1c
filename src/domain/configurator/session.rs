//! ConfiguratorSession - the caller that owns one shopper's selections.
//!
//! The engine itself is stateless. A session keeps the selections snapshot,
//! feeds it to [`compute_next_state`] on every event and applies the user's
//! answers with the downstream-reset rules of [`Selections`].

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::catalog::{Attribute, Catalog};
use crate::domain::foundation::SessionId;

use super::naming::{breadcrumb, display_name};
use super::{compute_next_state, EngineResult, ExtractedFacets, Selections};

/// Misuse of a session by its caller. Domain outcomes such as "no product
/// matches" are never errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("No question is pending; the configuration is already complete")]
    NoPendingQuestion,

    #[error("Option {index} is out of range ({available} options available)")]
    OptionOutOfRange { index: usize, available: usize },
}

/// One configurator run over a shared, immutable catalog.
#[derive(Debug, Clone)]
pub struct ConfiguratorSession {
    id: SessionId,
    catalog: Arc<Catalog>,
    selections: Selections,
}

impl ConfiguratorSession {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_selections(catalog, Selections::new())
    }

    /// Resumes from an existing snapshot.
    pub fn with_selections(catalog: Arc<Catalog>, selections: Selections) -> Self {
        Self {
            id: SessionId::new(),
            catalog,
            selections,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Recomputes the current state from scratch.
    pub fn state(&self) -> EngineResult {
        compute_next_state(&self.selections, &self.catalog)
    }

    /// Answers the pending question with the option at `index`.
    pub fn choose_option(&mut self, index: usize) -> Result<EngineResult, SessionError> {
        let state = self.state();
        let question = state.question().ok_or(SessionError::NoPendingQuestion)?;
        let option = question
            .options
            .get(index)
            .ok_or(SessionError::OptionOutOfRange {
                index,
                available: question.options.len(),
            })?;

        let attribute = question.attribute;
        let value = option.value.clone();
        Ok(self.select(attribute, value))
    }

    /// Records a choice for `attribute`, resetting everything after it.
    pub fn select(&mut self, attribute: Attribute, value: impl Into<String>) -> EngineResult {
        let value = value.into();
        let changed = self.selections.select(attribute, value.as_str());
        info!(
            session_id = %self.id,
            attribute = %attribute,
            value = %value,
            changed,
            "Selection recorded"
        );
        self.state()
    }

    /// Merges facets pulled from a free-text reply.
    pub fn apply_facets(&mut self, facets: &ExtractedFacets) -> EngineResult {
        let changed = self.selections.merge_facets(facets);
        info!(
            session_id = %self.id,
            supplied = facets.len(),
            changed = changed.len(),
            "Extracted facets merged"
        );
        self.state()
    }

    pub fn reset(&mut self) -> EngineResult {
        self.selections.reset();
        info!(session_id = %self.id, "Session reset");
        self.state()
    }

    pub fn breadcrumb(&self) -> Vec<String> {
        breadcrumb(&self.selections, self.catalog.schema())
    }

    pub fn display_name(&self) -> String {
        display_name(&self.selections, self.catalog.schema())
    }
}
