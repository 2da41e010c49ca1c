//! Configurator Module - the question-and-answer decision engine.
//!
//! Narrows the catalog to a single product by asking one attribute at a
//! time, in schema order, and only when the answer actually matters.
//!
//! # Components
//!
//! - `Selections` - Master List of chosen values with downstream reset
//! - `compute_next_state` - Pure engine: next question or final products
//! - `filter_products` / `available_options` - Matching and option discovery
//! - `ExtractedFacets` / `FacetExtractor` - Facets pulled from free text
//! - `display_name` / `breadcrumb` - Running product name
//! - `ConfiguratorSession` - Owns one shopper's selections
//!
//! # Design Philosophy
//!
//! The engine recomputes everything from the selections snapshot on every
//! call. Nothing derived is cached, so there is no stale state to reconcile
//! after an upstream answer changes.

mod engine;
mod facets;
mod filter;
mod naming;
mod options;
mod selections;
mod session;
mod width_bucket;

pub use engine::{compute_next_state, EngineResult, QuestionOption, QuestionState};
pub use facets::{ExtractedFacets, ExtractionError, FacetExtractor, KNOWLEDGE_BASE_ANSWER_KEY};
pub use filter::{filter_products, matches_selections, matches_value};
pub use naming::{breadcrumb, display_name, SHADE_PRESENT_LABEL};
pub use options::{available_options, range_buckets, sort_option_values};
pub use selections::Selections;
pub use session::{ConfiguratorSession, SessionError};
pub use width_bucket::{format_bucket, parse_bucket, point_bucket};
