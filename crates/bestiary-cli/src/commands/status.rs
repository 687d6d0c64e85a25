//! Status command - show record and trait counts.

use crate::cli::StatusArgs;
use crate::error::Result;
use bestiary_store::SqliteStore;
use colored::Colorize;

/// Execute the status command.
pub fn execute_status(args: StatusArgs) -> Result<()> {
    let store = SqliteStore::new(&args.db)?;
    let counts = store.counts()?;

    println!("{}", "Bestiary status".bold());
    println!("  Records:     {}", counts.total);
    println!(
        "  Processed:   {}",
        counts.processed.to_string().green()
    );
    println!("  Unprocessed: {}", counts.total - counts.processed);
    println!("  Traits:      {}", counts.traits);

    Ok(())
}
