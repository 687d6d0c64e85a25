//! Error types for the Extractor
//!
//! Extraction itself never fails: malformed or absent input degrades to
//! a narrative with zero traits. Only configuration handling can error.

use thiserror::Error;

/// Errors that can occur while handling extractor configuration
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for ExtractorError {
    fn from(e: toml::de::Error) -> Self {
        ExtractorError::Toml(e.to_string())
    }
}

impl From<toml::ser::Error> for ExtractorError {
    fn from(e: toml::ser::Error) -> Self {
        ExtractorError::Toml(e.to_string())
    }
}
