//! Bestiary Extractor
//!
//! Parses free-text monster descriptions into a cleaned narrative plus
//! structured special traits, and strips the formatting artifacts the
//! upstream dataset leaves behind.
//!
//! # Overview
//!
//! Upstream descriptions mark special traits with Markdown bold pairs
//! wrapping the trait name, followed by the trait's prose body:
//!
//! ```text
//! A cloud of triangles. **Mindless.** The creature has no mind.
//! ```
//!
//! The extractor splits on those delimiter pairs, validates each
//! candidate (name must end in a period, body must survive normalization
//! above a minimum length), and folds rejected candidates back into the
//! narrative so no content is lost.
//!
//! # Architecture
//!
//! ```text
//! RawDescription → Tokenizer → Candidate validation → Normalizer → Extraction
//! ```
//!
//! The whole pipeline is a pure function of its input: the same raw
//! description always yields the same traits and cleaned narrative, and
//! re-running it over its own output changes nothing.
//!
//! # Example Usage
//!
//! ```
//! use bestiary_extractor::extract_traits;
//!
//! let raw = "A cloud of triangles. **Mindless.** The creature has no mind.";
//! let extraction = extract_traits(Some(raw));
//!
//! assert_eq!(extraction.cleaned_description, "A cloud of triangles.");
//! assert_eq!(extraction.traits.len(), 1);
//! assert_eq!(extraction.traits[0].name, "Mindless");
//! assert_eq!(extraction.traits[0].description, "The creature has no mind.");
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod normalize;
mod tokenizer;
mod extractor;

#[cfg(test)]
mod tests;

pub use error::ExtractorError;
pub use config::ExtractorConfig;
pub use extractor::{extract_traits, normalize, Extraction, TraitExtractor};
