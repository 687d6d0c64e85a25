//! Monster module - the unit of work for the extraction pipeline

use std::fmt;

/// Unique identifier for a monster record based on UUIDv7
///
/// UUIDv7 provides:
/// - Chronological sortability (import order is preserved)
/// - 128-bit uniqueness
/// - RFC 9562-standard format with broad ecosystem support
/// - No coordination required when importing in bulk
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonsterId(u128);

impl MonsterId {
    /// Generate a new UUIDv7-based MonsterId
    ///
    /// # Examples
    ///
    /// ```
    /// use bestiary_domain::MonsterId;
    ///
    /// let id = MonsterId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a MonsterId from a raw u128 value
    ///
    /// This is primarily for storage layer deserialization.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a MonsterId from a UUIDv7 string
    ///
    /// # Examples
    ///
    /// ```
    /// use bestiary_domain::MonsterId;
    ///
    /// let id = MonsterId::new();
    /// let id_str = id.to_string();
    /// let parsed = MonsterId::from_string(&id_str).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUIDv7 string: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for MonsterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MonsterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// A structured special trait extracted from a monster description
///
/// A trait is only ever emitted with a non-empty name and a description
/// that survived normalization above the configured minimum length;
/// anything shorter is a false-positive split, not a real trait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialTrait {
    /// Short label, e.g. "Mindless"
    pub name: String,

    /// Prose body belonging to the trait
    pub description: String,
}

impl SpecialTrait {
    /// Create a new special trait
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A monster record as stored and served
///
/// `raw_description` is immutable input from the upstream dataset.
/// `cleaned_description` and `traits` are derived and recomputed
/// deterministically from it; `processed` marks whether the pipeline
/// has already run over this record.
#[derive(Debug, Clone, PartialEq)]
pub struct Monster {
    /// Unique identifier
    pub id: MonsterId,

    /// Dataset slug, unique per import (e.g. "sea-dragon")
    pub slug: String,

    /// Display name
    pub name: String,

    /// Raw free-text description from the upstream source
    pub raw_description: String,

    /// Narrative remainder after trait extraction, if processed
    pub cleaned_description: Option<String>,

    /// Extracted special traits, in source order
    pub traits: Vec<SpecialTrait>,

    /// Whether the extraction pipeline has run over this record
    pub processed: bool,
}

impl Monster {
    /// Create a new unprocessed monster record
    pub fn new(
        id: MonsterId,
        slug: impl Into<String>,
        name: impl Into<String>,
        raw_description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            slug: slug.into(),
            name: name.into(),
            raw_description: raw_description.into(),
            cleaned_description: None,
            traits: Vec::new(),
            processed: false,
        }
    }
}

/// The write-back payload for a processed record
///
/// A record is either fully updated (description, traits, and the
/// processed flag together) or left untouched on error.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedUpdate {
    /// Cleaned narrative description
    pub cleaned_description: String,

    /// Extracted traits, in source order
    pub traits: Vec<SpecialTrait>,
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: UUIDv7 ordering matches u128 ordering
        #[test]
        fn test_uuid_ordering_property(a: u128, b: u128) {
            let id_a = MonsterId::from_value(a);
            let id_b = MonsterId::from_value(b);

            prop_assert_eq!(id_a < id_b, a < b);
            prop_assert_eq!(id_a == id_b, a == b);
            prop_assert_eq!(id_a > id_b, a > b);
        }

        /// Property: Round-trip through string representation preserves ID
        #[test]
        fn test_uuid_string_roundtrip(value: u128) {
            let id = MonsterId::from_value(value);
            let id_str = id.to_string();

            match MonsterId::from_string(&id_str) {
                Ok(parsed) => prop_assert_eq!(id, parsed),
                Err(e) => return Err(TestCaseError::fail(e)),
            }
        }
    }
}
