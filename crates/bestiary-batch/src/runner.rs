//! Core batch runner implementation

use crate::{BatchConfig, BatchError, BatchMetrics};
use bestiary_domain::traits::MonsterStore;
use bestiary_domain::{MonsterId, ProcessedUpdate};
use bestiary_extractor::{ExtractorConfig, TraitExtractor};
use std::time::SystemTime;
use tracing::{debug, info, warn};

/// Batch runner for the trait-extraction pipeline
///
/// Fetches unprocessed monster records, runs the pure extraction
/// pipeline over each one sequentially, and writes the results back.
/// A failed record never aborts the batch; only an unreachable record
/// source does.
///
/// # Examples
///
/// ```no_run
/// use bestiary_batch::{BatchConfig, BatchRunner};
/// use bestiary_extractor::ExtractorConfig;
/// use bestiary_store::SqliteStore;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut store = SqliteStore::new("bestiary.db")?;
/// let mut runner = BatchRunner::new(BatchConfig::default(), ExtractorConfig::default());
///
/// let metrics = runner.run(&mut store).await?;
/// println!("{}", metrics.summary());
/// # Ok(())
/// # }
/// ```
pub struct BatchRunner {
    extractor: TraitExtractor,
    config: BatchConfig,
    metrics: BatchMetrics,
}

impl BatchRunner {
    /// Create a new runner with the given configurations
    pub fn new(config: BatchConfig, extractor_config: ExtractorConfig) -> Self {
        Self {
            extractor: TraitExtractor::new(extractor_config),
            config,
            metrics: BatchMetrics::new(),
        }
    }

    /// Create a runner with default configurations
    pub fn default_config() -> Self {
        Self::new(BatchConfig::default(), ExtractorConfig::default())
    }

    /// Get a reference to the current metrics
    pub fn metrics(&self) -> &BatchMetrics {
        &self.metrics
    }

    /// Reset metrics counters
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// Run one batch over all unprocessed records
    ///
    /// Returns the updated metrics. Re-running is always safe: processed
    /// records are skipped via the `processed` flag, and the pipeline is
    /// a pure function of each record's raw description.
    pub async fn run<S>(&mut self, store: &mut S) -> Result<BatchMetrics, BatchError>
    where
        S: MonsterStore,
        S::Error: std::fmt::Display,
    {
        let start = SystemTime::now();

        let records = store
            .fetch_unprocessed(self.config.record_limit)
            .map_err(|e| BatchError::Store(e.to_string()))?;

        info!("Fetched {} unprocessed records", records.len());

        for (idx, monster) in records.into_iter().enumerate() {
            if idx > 0 && self.config.inter_record_delay_ms > 0 {
                tokio::time::sleep(self.config.inter_record_delay()).await;
            }

            let extraction = self.extractor.extract(Some(&monster.raw_description));
            let trait_count = extraction.traits.len();

            if self.config.dry_run {
                info!(
                    "DRY RUN: would update '{}' ({} traits, {} narrative chars)",
                    monster.slug,
                    trait_count,
                    extraction.cleaned_description.len()
                );
                self.metrics.record_dry_run(trait_count);
                continue;
            }

            let update = ProcessedUpdate {
                cleaned_description: extraction.cleaned_description,
                traits: extraction.traits,
            };

            match self.write_with_retry(store, monster.id, update).await {
                Ok(()) => {
                    debug!("Updated '{}' ({} traits)", monster.slug, trait_count);
                    self.metrics.record_success(trait_count);
                }
                Err(reason) => {
                    warn!("Failed to update '{}': {}", monster.slug, reason);
                    self.metrics.record_failure();
                }
            }
        }

        if let Ok(elapsed) = start.elapsed() {
            self.metrics.total_runtime_secs += elapsed.as_secs();
        }

        info!("\n{}", self.metrics.summary());

        Ok(self.metrics.clone())
    }

    /// Write a record back, retrying a bounded number of times
    async fn write_with_retry<S>(
        &self,
        store: &mut S,
        id: MonsterId,
        update: ProcessedUpdate,
    ) -> Result<(), String>
    where
        S: MonsterStore,
        S::Error: std::fmt::Display,
    {
        let mut attempt = 0;
        loop {
            match store.update_record(id, update.clone()) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    attempt += 1;
                    if attempt > self.config.write_retries {
                        return Err(e.to_string());
                    }
                    debug!(
                        "Retrying write for {} (attempt {}/{}): {}",
                        id, attempt, self.config.write_retries, e
                    );
                    tokio::time::sleep(self.config.retry_backoff()).await;
                }
            }
        }
    }
}
