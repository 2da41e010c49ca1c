//! AttributeSequence - Centralized ordering logic for schema attributes.
//!
//! The configurator asks about attributes in a fixed order. This module
//! consolidates all ordering logic into a single location so that the
//! engine, the selections map and the naming rules agree on it.
//!
//! # Attribute Order
//!
//! 1. Category → 2. System → 3. Shade → 4. ShadeMotorization →
//! 5. Material → 6. Width → 7. LeafCount
//!
//! # Usage
//!
//! ```ignore
//! use crate::domain::catalog::{Attribute, AttributeSequence};
//!
//! let idx = AttributeSequence::order_index(Attribute::Material); // 4
//! let after = AttributeSequence::attributes_after(Attribute::Width); // [LeafCount]
//! ```

use super::Attribute;

/// Number of attributes in the schema.
pub const ATTRIBUTE_COUNT: usize = 7;

/// Central location for attribute ordering logic.
pub struct AttributeSequence;

impl AttributeSequence {
    /// The canonical question order. Never reordered at runtime.
    pub const ORDER: [Attribute; ATTRIBUTE_COUNT] = [
        Attribute::Category,
        Attribute::System,
        Attribute::Shade,
        Attribute::ShadeMotorization,
        Attribute::Material,
        Attribute::Width,
        Attribute::LeafCount,
    ];

    /// Returns all attributes in order.
    pub fn all() -> &'static [Attribute; ATTRIBUTE_COUNT] {
        &Self::ORDER
    }

    /// Returns the 0-based index of an attribute in the sequence.
    #[inline]
    pub fn order_index(attribute: Attribute) -> usize {
        match attribute {
            Attribute::Category => 0,
            Attribute::System => 1,
            Attribute::Shade => 2,
            Attribute::ShadeMotorization => 3,
            Attribute::Material => 4,
            Attribute::Width => 5,
            Attribute::LeafCount => 6,
        }
    }

    /// Returns all attributes strictly after the specified one.
    ///
    /// These are the selections invalidated when `attribute` changes.
    pub fn attributes_after(attribute: Attribute) -> &'static [Attribute] {
        &Self::all()[Self::order_index(attribute) + 1..]
    }
}
