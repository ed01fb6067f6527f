use super::{drop_block, template_storage, with_drafts};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use recruitify_blocks::Registry;
use recruitify_editor::BuilderContainer;
use std::path::Path;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Agency that owns the template
    #[arg(short, long)]
    pub agency: String,

    #[arg(short, long)]
    pub title: String,

    #[arg(short, long)]
    pub description: Option<String>,

    /// Block to drop onto the page, repeatable, in page order
    #[arg(short, long = "block")]
    pub blocks: Vec<String>,
}

pub async fn new_template(args: NewArgs, config: &Config, cwd: &Path) -> Result<()> {
    let storage = template_storage(config, cwd);
    let mut container = with_drafts(
        BuilderContainer::new(args.agency.as_str(), Registry::standard()),
        config,
        cwd,
    );

    for key in &args.blocks {
        let id = drop_block(&mut container, key, None, None)?;
        println!("  {} {} {}", "✓".green(), key, id.dimmed());
    }

    let record = container
        .save(&storage, &args.title, args.description.as_deref())
        .await?;

    println!();
    println!(
        "{} Created {} ({})",
        "✅".green(),
        record.title.bright_white(),
        record.id
    );
    println!("   {}", storage.dir().join(format!("{}.json", record.id)).display());

    Ok(())
}
