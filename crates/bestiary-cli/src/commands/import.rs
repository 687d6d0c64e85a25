//! Import command - load monster records from a JSON export.

use crate::cli::ImportArgs;
use crate::error::{CliError, Result};
use bestiary_store::SqliteStore;
use colored::Colorize;
use tracing::warn;

/// Execute the import command.
///
/// The input is an array of objects in the shape the upstream dataset
/// exports: `{"slug": ..., "name": ..., "desc": ...}`. Records without
/// a slug are skipped; duplicate slugs update the existing row.
pub fn execute_import(args: ImportArgs) -> Result<()> {
    let json = std::fs::read_to_string(&args.file)?;
    let value: serde_json::Value = serde_json::from_str(&json)?;

    let entries = value
        .as_array()
        .ok_or_else(|| CliError::InvalidInput("expected a JSON array of monsters".to_string()))?;

    let mut store = SqliteStore::new(&args.db)?;

    let mut imported = 0usize;
    let mut skipped = 0usize;

    for entry in entries {
        let Some(slug) = entry.get("slug").and_then(|v| v.as_str()) else {
            warn!("Skipping record without a slug: {}", entry);
            skipped += 1;
            continue;
        };

        let name = entry.get("name").and_then(|v| v.as_str()).unwrap_or(slug);
        let desc = entry
            .get("desc")
            .or_else(|| entry.get("description"))
            .and_then(|v| v.as_str())
            .unwrap_or("");

        store.import_monster(slug, name, desc)?;
        imported += 1;
    }

    println!(
        "{} {} records ({} skipped)",
        "Imported".green().bold(),
        imported,
        skipped
    );

    Ok(())
}
