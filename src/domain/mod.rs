//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `catalog` - Attributes, products, schema labels and the validated catalog
//! - `configurator` - Decision engine, selections, naming and sessions

pub mod catalog;
pub mod configurator;
pub mod foundation;
