//! Error types for batch processing

use thiserror::Error;

/// Errors that abort a batch run
///
/// Per-record write failures are not errors at this level: they are
/// logged, counted in the metrics, and the batch continues. Only an
/// unreachable record source is fatal.
#[derive(Error, Debug)]
pub enum BatchError {
    /// The record source itself is unreachable
    #[error("Record store unreachable: {0}")]
    Store(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
