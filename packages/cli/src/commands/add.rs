use super::{drop_block, template_storage, with_drafts};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use recruitify_blocks::Registry;
use recruitify_editor::BuilderContainer;
use std::path::Path;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Template id
    pub template: String,

    /// Block key from the palette
    pub block: String,

    /// Container to drop into (defaults to the page root)
    #[arg(short, long)]
    pub parent: Option<String>,

    /// Drop zone within the parent (defaults to the end)
    #[arg(short, long)]
    pub index: Option<usize>,
}

pub async fn add(args: AddArgs, config: &Config, cwd: &Path) -> Result<()> {
    let storage = template_storage(config, cwd);
    let container = BuilderContainer::load(&storage, &args.template, Registry::standard()).await?;
    let mut container = with_drafts(container, config, cwd);

    if container.restore_draft()? {
        println!(
            "{} Restored unsaved draft for {}",
            "⚠️".yellow(),
            args.template.bright_white()
        );
    }

    let id = drop_block(
        &mut container,
        &args.block,
        args.parent.as_deref(),
        args.index,
    )?;

    // title is only used for templates that were never saved
    let record = container.save(&storage, "", None).await?;

    println!(
        "{} Added {} {} to {}",
        "✓".green(),
        args.block,
        id.dimmed(),
        record.title.bright_white()
    );

    Ok(())
}
