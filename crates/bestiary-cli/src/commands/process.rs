//! Process command - run the trait-extraction batch.

use crate::cli::ProcessArgs;
use crate::error::Result;
use bestiary_batch::{BatchConfig, BatchRunner};
use bestiary_extractor::ExtractorConfig;
use bestiary_store::SqliteStore;
use colored::Colorize;
use serde::Deserialize;

/// Optional TOML config file with per-component tables.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    extractor: Option<ExtractorConfig>,

    #[serde(default)]
    batch: Option<BatchConfig>,
}

/// Execute the process command.
pub async fn execute_process(args: ProcessArgs) -> Result<()> {
    let file_config = match &args.config {
        Some(path) => {
            let toml_str = std::fs::read_to_string(path)?;
            toml::from_str::<FileConfig>(&toml_str)?
        }
        None => FileConfig::default(),
    };

    let extractor_config = file_config.extractor.unwrap_or_default();
    extractor_config.validate()?;

    let mut batch_config = file_config.batch.unwrap_or_default();
    if args.limit.is_some() {
        batch_config.record_limit = args.limit;
    }
    if args.dry_run {
        batch_config.dry_run = true;
    }

    let mut store = SqliteStore::new(&args.db)?;
    let mut runner = BatchRunner::new(batch_config, extractor_config);

    let metrics = runner.run(&mut store).await?;

    println!("{}", "Batch complete".bold());
    println!("  Processed:    {}", metrics.processed);
    println!(
        "  Succeeded:    {}",
        metrics.succeeded.to_string().green()
    );
    if metrics.failed > 0 {
        println!("  Failed:       {}", metrics.failed.to_string().red());
    } else {
        println!("  Failed:       {}", metrics.failed);
    }
    println!("  Traits found: {}", metrics.traits_found);

    Ok(())
}
