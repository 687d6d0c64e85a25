//! Bestiary Domain Layer
//!
//! This crate contains the core domain model for Bestiary: the monster
//! records the extraction pipeline consumes and produces, and the trait
//! interfaces that decouple the pipeline from persistence technology.
//!
//! ## Key Concepts
//!
//! - **Monster**: a single record imported from the upstream dataset,
//!   carrying an immutable raw description and derived, recomputable
//!   cleaned text and special traits
//! - **SpecialTrait**: a structured (name, description) unit extracted
//!   from free-text monster descriptions
//! - **Processed flag**: marks records the pipeline has already handled,
//!   making batch runs resumable and idempotent
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - No external crate dependencies (uuid excepted)
//! - Pure domain types only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod monster;
pub mod traits;

// Re-exports for convenience
pub use monster::{Monster, MonsterId, ProcessedUpdate, SpecialTrait};
pub use traits::MonsterStore;
