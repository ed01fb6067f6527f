use super::template_storage;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use recruitify_blocks::Registry;
use recruitify_editor::BuilderContainer;
use std::path::Path;

#[derive(Debug, Args)]
pub struct RenameArgs {
    /// Template id
    pub template: String,

    #[arg(short, long)]
    pub title: String,

    #[arg(short, long)]
    pub description: Option<String>,
}

pub async fn rename(args: RenameArgs, config: &Config, cwd: &Path) -> Result<()> {
    let storage = template_storage(config, cwd);
    let container = BuilderContainer::load(&storage, &args.template, Registry::standard()).await?;

    let record = container
        .update_metadata(&storage, &args.title, args.description.as_deref())
        .await?;

    println!("{} Renamed {} to {}", "✓".green(), record.id, record.title.bright_white());
    Ok(())
}
