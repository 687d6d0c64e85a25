//! Bestiary Batch
//!
//! Batch orchestration for the trait-extraction pipeline: iterate a
//! store of monster records, run the pipeline over every unprocessed
//! record, and write the results back.
//!
//! # Overview
//!
//! The runner is responsible for:
//! - **Resumability**: only unprocessed records are fetched, so re-running
//!   a batch picks up where the last run stopped
//! - **Failure isolation**: a failed write is logged and counted, the
//!   record stays unprocessed, and the batch continues
//! - **Throttling**: an optional inter-record delay keeps bulk runs from
//!   overwhelming the backing store
//! - **Metrics collection**: every run ends with a summary of
//!   processed/succeeded/failed counts and traits found
//!
//! # Usage
//!
//! ```no_run
//! use bestiary_batch::{BatchConfig, BatchRunner};
//! use bestiary_extractor::ExtractorConfig;
//! use bestiary_store::SqliteStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut store = SqliteStore::new("bestiary.db")?;
//!     let mut runner = BatchRunner::new(BatchConfig::default(), ExtractorConfig::default());
//!
//!     let metrics = runner.run(&mut store).await?;
//!     println!("{}", metrics.summary());
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! The runner can be configured via TOML:
//!
//! ```toml
//! inter_record_delay_ms = 100
//! write_retries = 2
//! retry_backoff_ms = 250
//! dry_run = false
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod metrics;
mod runner;

pub use error::BatchError;
pub use config::BatchConfig;
pub use metrics::BatchMetrics;
pub use runner::BatchRunner;
