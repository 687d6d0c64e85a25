//! Extract command - run the pipeline over one description and print it.

use crate::cli::ExtractArgs;
use crate::error::{CliError, Result};
use bestiary_extractor::extract_traits;
use colored::Colorize;

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs) -> Result<()> {
    let raw = match (&args.file, &args.text) {
        (Some(path), _) => std::fs::read_to_string(path)?,
        (None, Some(text)) => text.clone(),
        (None, None) => {
            return Err(CliError::InvalidInput(
                "provide a description as an argument or via --file".to_string(),
            ))
        }
    };

    let extraction = extract_traits(Some(&raw));

    if args.json {
        let traits: Vec<serde_json::Value> = extraction
            .traits
            .iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                })
            })
            .collect();
        let output = serde_json::json!({
            "cleaned_description": extraction.cleaned_description,
            "traits": traits,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Description".bold());
    println!("  {}", extraction.cleaned_description);
    println!();
    println!(
        "{} ({})",
        "Special traits".bold(),
        extraction.traits.len()
    );
    for t in &extraction.traits {
        println!("  {}: {}", t.name.cyan(), t.description);
    }

    Ok(())
}
