//! Metrics collection for batch runs

/// Metrics collected during a batch run
///
/// A record counts as processed once the pipeline has run over it,
/// whether or not the write back succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchMetrics {
    /// Records the pipeline ran over
    pub processed: usize,

    /// Records fully written back and marked processed
    pub succeeded: usize,

    /// Records whose write back failed (they remain unprocessed)
    pub failed: usize,

    /// Total traits extracted across all processed records
    pub traits_found: usize,

    /// Total runtime in seconds
    pub total_runtime_secs: u64,
}

impl BatchMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fully written record
    pub fn record_success(&mut self, trait_count: usize) {
        self.processed += 1;
        self.succeeded += 1;
        self.traits_found += trait_count;
    }

    /// Record a record whose write back failed
    pub fn record_failure(&mut self) {
        self.processed += 1;
        self.failed += 1;
    }

    /// Record a dry-run record (extracted, nothing written)
    pub fn record_dry_run(&mut self, trait_count: usize) {
        self.processed += 1;
        self.traits_found += trait_count;
    }

    /// Reset all metrics
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a summary report of the run
    pub fn summary(&self) -> String {
        [
            "Batch Run Summary".to_string(),
            "=================".to_string(),
            format!("Processed:    {}", self.processed),
            format!("Succeeded:    {}", self.succeeded),
            format!("Failed:       {}", self.failed),
            format!("Traits found: {}", self.traits_found),
            format!("Runtime:      {}s", self.total_runtime_secs),
        ]
        .join("\n")
    }
}
