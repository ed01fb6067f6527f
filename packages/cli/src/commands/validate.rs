use super::load_document;
use crate::config::Config;
use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use recruitify_blocks::{validate_tree, Registry};
use std::path::Path;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Template id or path to a document `.json` file
    pub input: String,
}

pub async fn validate(args: ValidateArgs, config: &Config, cwd: &Path) -> Result<()> {
    let tree = load_document(&args.input, config, cwd).await?;
    let issues = validate_tree(&tree, &Registry::standard());

    if issues.is_empty() {
        println!("{} {} is valid", "✓".green(), args.input.bright_white());
        return Ok(());
    }

    for issue in &issues {
        println!("  {} {}", "✗".red(), issue);
    }
    println!();
    bail!("{} problem(s) in {}", issues.len(), args.input)
}
