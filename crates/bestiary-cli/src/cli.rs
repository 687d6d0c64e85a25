//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Bestiary CLI - Import monster records and extract their special traits.
#[derive(Debug, Parser)]
#[command(name = "bestiary")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Import monster records from a JSON export
    Import(ImportArgs),

    /// Run the trait-extraction batch over unprocessed records
    Process(ProcessArgs),

    /// Extract traits from a single description and print the result
    Extract(ExtractArgs),

    /// Show record and trait counts for a database
    Status(StatusArgs),
}

/// Arguments for the import command.
#[derive(Debug, Parser)]
pub struct ImportArgs {
    /// Path to the SQLite database
    #[arg(short, long, env = "BESTIARY_DB", default_value = "bestiary.db")]
    pub db: String,

    /// JSON file: an array of objects with "slug", "name", and "desc"
    pub file: String,
}

/// Arguments for the process command.
#[derive(Debug, Parser)]
pub struct ProcessArgs {
    /// Path to the SQLite database
    #[arg(short, long, env = "BESTIARY_DB", default_value = "bestiary.db")]
    pub db: String,

    /// Maximum records to process in this run
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Extract and report, but write nothing back
    #[arg(long)]
    pub dry_run: bool,

    /// TOML config file with [extractor] and [batch] tables
    #[arg(short, long)]
    pub config: Option<String>,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Read the raw description from a file instead of the argument
    #[arg(short, long)]
    pub file: Option<String>,

    /// Raw description text
    pub text: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the status command.
#[derive(Debug, Parser)]
pub struct StatusArgs {
    /// Path to the SQLite database
    #[arg(short, long, env = "BESTIARY_DB", default_value = "bestiary.db")]
    pub db: String,
}
