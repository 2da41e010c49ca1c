//! Product Configurator - Guided door and window selection
//!
//! This crate narrows a product catalog to a single item by asking one
//! attribute at a time, skipping questions whose answer is already forced.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
