//! Configuration for batch runs

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the batch runner
///
/// # Examples
///
/// ```
/// use bestiary_batch::BatchConfig;
///
/// // Default configuration (balanced)
/// let config = BatchConfig::default();
/// assert_eq!(config.write_retries, 2);
///
/// // Fast local runs
/// let config = BatchConfig::aggressive();
/// assert_eq!(config.inter_record_delay_ms, 0);
///
/// // Gentle on a rate-limited store
/// let config = BatchConfig::lenient();
/// assert_eq!(config.inter_record_delay_ms, 250);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Maximum records to process in one run (None = all unprocessed)
    #[serde(default)]
    pub record_limit: Option<usize>,

    /// Delay between records (milliseconds); a throttling courtesy for
    /// the backing store, not a correctness requirement
    #[serde(default = "default_inter_record_delay_ms")]
    pub inter_record_delay_ms: u64,

    /// How many times to retry a failed record write before counting it
    /// as a failure for that record
    #[serde(default = "default_write_retries")]
    pub write_retries: u32,

    /// Backoff between write retries (milliseconds)
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,

    /// Dry-run mode: extract and log, but write nothing
    #[serde(default)]
    pub dry_run: bool,
}

fn default_inter_record_delay_ms() -> u64 {
    100
}

fn default_write_retries() -> u32 {
    2
}

fn default_retry_backoff_ms() -> u64 {
    250
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            record_limit: None,
            inter_record_delay_ms: default_inter_record_delay_ms(),
            write_retries: default_write_retries(),
            retry_backoff_ms: default_retry_backoff_ms(),
            dry_run: false,
        }
    }
}

impl BatchConfig {
    /// Aggressive preset: no throttling, single retry
    ///
    /// Suitable for local SQLite files where write contention is rare.
    pub fn aggressive() -> Self {
        Self {
            inter_record_delay_ms: 0,
            write_retries: 1,
            retry_backoff_ms: 100,
            ..Default::default()
        }
    }

    /// Lenient preset: longer delays, more retries
    ///
    /// Suitable for remote or rate-limited stores.
    pub fn lenient() -> Self {
        Self {
            inter_record_delay_ms: 250,
            write_retries: 3,
            retry_backoff_ms: 500,
            ..Default::default()
        }
    }

    /// Get the inter-record delay as a Duration
    pub fn inter_record_delay(&self) -> Duration {
        Duration::from_millis(self.inter_record_delay_ms)
    }

    /// Get the retry backoff as a Duration
    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, crate::BatchError> {
        toml::from_str(toml_str).map_err(|e| crate::BatchError::Config(e.to_string()))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, crate::BatchError> {
        toml::to_string_pretty(self).map_err(|e| crate::BatchError::Config(e.to_string()))
    }
}
