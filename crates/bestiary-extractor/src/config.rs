//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};

/// Configuration for the Extractor
///
/// The boilerplate marker list is an allow-list reverse-engineered from
/// observed bad data, not a principled rule. It is deliberately
/// configurable and should not be assumed exhaustive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Minimum length (characters) of a normalized trait body;
    /// shorter candidates are rejected as false-positive splits
    #[serde(default = "default_min_trait_body_len")]
    pub min_trait_body_len: usize,

    /// Boilerplate markers; text is truncated at the earliest occurrence
    #[serde(default = "default_boilerplate_markers")]
    pub boilerplate_markers: Vec<String>,
}

fn default_min_trait_body_len() -> usize {
    10
}

fn default_boilerplate_markers() -> Vec<String> {
    vec![
        "Open Game License".to_string(),
        "Open Design LLC".to_string(),
        "Husks are the opposite of".to_string(),
    ]
}

impl Default for ExtractorConfig {
    /// Default configuration: the empirical 10-character body threshold
    /// and the boilerplate phrasings observed in the upstream dataset
    fn default() -> Self {
        Self {
            min_trait_body_len: default_min_trait_body_len(),
            boilerplate_markers: default_boilerplate_markers(),
        }
    }
}

impl ExtractorConfig {
    /// Aggressive preset: higher body threshold, fewer false positives
    /// at the cost of dropping terse genuine traits
    pub fn aggressive() -> Self {
        Self {
            min_trait_body_len: 20,
            ..Default::default()
        }
    }

    /// Lenient preset: lower body threshold, keeps terse traits
    pub fn lenient() -> Self {
        Self {
            min_trait_body_len: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.min_trait_body_len == 0 {
            return Err(ExtractorError::Config(
                "min_trait_body_len must be greater than 0".to_string(),
            ));
        }
        if self.boilerplate_markers.iter().any(|m| m.trim().is_empty()) {
            return Err(ExtractorError::Config(
                "boilerplate markers must be non-empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.min_trait_body_len, 10);
    }

    #[test]
    fn test_preset_configs_are_valid() {
        assert!(ExtractorConfig::aggressive().validate().is_ok());
        assert!(ExtractorConfig::lenient().validate().is_ok());
    }

    #[test]
    fn test_default_markers_include_ogl() {
        let config = ExtractorConfig::default();
        assert!(config
            .boilerplate_markers
            .iter()
            .any(|m| m == "Open Game License"));
    }

    #[test]
    fn test_invalid_zero_threshold() {
        let mut config = ExtractorConfig::default();
        config.min_trait_body_len = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_empty_marker() {
        let mut config = ExtractorConfig::default();
        config.boilerplate_markers.push("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::aggressive();
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.min_trait_body_len, parsed.min_trait_body_len);
        assert_eq!(config.boilerplate_markers, parsed.boilerplate_markers);
    }

    #[test]
    fn test_toml_defaults_fill_missing_fields() {
        let parsed = ExtractorConfig::from_toml("min_trait_body_len = 15\n").unwrap();
        assert_eq!(parsed.min_trait_body_len, 15);
        assert!(!parsed.boilerplate_markers.is_empty());
    }
}
