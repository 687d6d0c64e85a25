//! Core trait extraction pipeline

use crate::config::ExtractorConfig;
use crate::normalize::normalize_text;
use crate::tokenizer::{tokenize, Segment};
use bestiary_domain::SpecialTrait;
use tracing::debug;

/// Result of running the pipeline over one raw description
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// Narrative remainder with trait segments removed and artifacts stripped
    pub cleaned_description: String,

    /// Extracted traits, in source order
    pub traits: Vec<SpecialTrait>,
}

/// The trait extraction pipeline
///
/// A pure function of its input: the same raw description always yields
/// the same cleaned narrative and trait list, which is what makes batch
/// runs safe to re-execute.
///
/// # Examples
///
/// ```
/// use bestiary_extractor::{TraitExtractor, ExtractorConfig};
///
/// let extractor = TraitExtractor::new(ExtractorConfig::default());
/// let result = extractor.extract(Some("A beast. **Mindless.** It has no mind at all."));
///
/// assert_eq!(result.cleaned_description, "A beast.");
/// assert_eq!(result.traits[0].name, "Mindless");
/// ```
pub struct TraitExtractor {
    config: ExtractorConfig,
}

impl TraitExtractor {
    /// Create a new extractor with the given configuration
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Create an extractor with default configuration
    pub fn default_config() -> Self {
        Self::new(ExtractorConfig::default())
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Normalize a piece of text using this extractor's marker list
    ///
    /// Pure and idempotent: `normalize(normalize(s)) == normalize(s)`.
    pub fn normalize(&self, text: &str) -> String {
        normalize_text(text, &self.config.boilerplate_markers)
    }

    /// Extract special traits from a raw description
    ///
    /// Absent or empty input yields zero traits and the (trimmed) input
    /// as narrative; malformed input is never an error.
    pub fn extract(&self, raw: Option<&str>) -> Extraction {
        let raw = match raw {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                return Extraction {
                    cleaned_description: raw.unwrap_or("").trim().to_string(),
                    traits: Vec::new(),
                }
            }
        };

        let mut narrative_parts: Vec<String> = Vec::new();
        let mut traits = Vec::new();

        for segment in tokenize(raw) {
            match segment {
                Segment::Narrative(text) => narrative_parts.push(text),
                Segment::Candidate { name, body } => match self.validate_candidate(&name, &body) {
                    Some(special_trait) => traits.push(special_trait),
                    None => {
                        // Not a real trait (bold emphasis or a too-short
                        // body); fold the text back into the narrative so
                        // no content is lost
                        debug!("Rejected trait candidate: {:?}", name);
                        narrative_parts.push(name);
                        narrative_parts.push(body);
                    }
                },
            }
        }

        let cleaned_description = self.normalize(&narrative_parts.join(" "));

        debug!(
            "Extracted {} traits, narrative length {}",
            traits.len(),
            cleaned_description.len()
        );

        Extraction {
            cleaned_description,
            traits,
        }
    }

    /// Turn a (name, body) candidate pair into a validated trait, or reject it
    ///
    /// The trait name is the text up to the first period inside the bold
    /// segment; anything after that period is discarded. No period means
    /// the bold text is emphasis, not a trait header.
    fn validate_candidate(&self, name: &str, body: &str) -> Option<SpecialTrait> {
        let period = name.find('.')?;

        let trait_name = self.normalize(&name[..period]);
        if trait_name.is_empty() {
            return None;
        }

        let description = self.normalize(body);
        if description.chars().count() < self.config.min_trait_body_len {
            return None;
        }

        Some(SpecialTrait {
            name: trait_name,
            description,
        })
    }
}

/// Extract special traits from a raw description using default configuration
///
/// See [`TraitExtractor::extract`].
pub fn extract_traits(raw: Option<&str>) -> Extraction {
    TraitExtractor::default_config().extract(raw)
}

/// Normalize text using the default boilerplate marker list
///
/// See [`TraitExtractor::normalize`].
pub fn normalize(text: &str) -> String {
    TraitExtractor::default_config().normalize(text)
}
