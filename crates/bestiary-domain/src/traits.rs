//! Trait definitions for external interactions
//!
//! These traits define the boundary between the pure extraction pipeline
//! and infrastructure. Implementations live in other crates.

use crate::{Monster, MonsterId, ProcessedUpdate};

/// Trait for the monster record store consumed by the batch orchestrator
///
/// Implemented by the infrastructure layer (bestiary-store)
pub trait MonsterStore {
    /// Error type for store operations
    type Error;

    /// Fetch records not yet marked processed, up to an optional limit
    fn fetch_unprocessed(&self, limit: Option<usize>) -> Result<Vec<Monster>, Self::Error>;

    /// Write back a processed record and mark it processed
    ///
    /// The update is all-or-nothing: description, traits, and the
    /// processed flag change together or not at all.
    fn update_record(&mut self, id: MonsterId, update: ProcessedUpdate) -> Result<(), Self::Error>;
}
