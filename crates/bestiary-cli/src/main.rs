//! Bestiary CLI - command-line interface for the trait-extraction pipeline.

use bestiary_cli::commands;
use bestiary_cli::{Cli, Command};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Command::Import(args) => commands::execute_import(args)?,
        Command::Process(args) => commands::execute_process(args).await?,
        Command::Extract(args) => commands::execute_extract(args)?,
        Command::Status(args) => commands::execute_status(args)?,
    }

    Ok(())
}
