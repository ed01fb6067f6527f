use anyhow::Result;
use clap::Args;
use colored::Colorize;
use recruitify_blocks::{Category, Registry};

#[derive(Debug, Args)]
pub struct BlocksArgs {
    /// Only list one category (layout, content, form, jobs)
    #[arg(short, long)]
    pub category: Option<String>,
}

pub fn blocks(args: BlocksArgs) -> Result<()> {
    let registry = Registry::standard();

    let categories: Vec<Category> = match args.category.as_deref() {
        Some(name) => {
            let category = Category::ALL
                .into_iter()
                .find(|c| c.as_str() == name)
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "Invalid category: {}. Use: layout, content, form, or jobs",
                        name
                    )
                })?;
            vec![category]
        }
        None => Category::ALL.to_vec(),
    };

    for category in categories {
        println!("{}", category.as_str().to_uppercase().bright_blue().bold());
        for definition in registry.palette_by_category(category) {
            let marker = if definition.allows_children() { "▣" } else { "▪" };
            println!("  {} {:<18} {}", marker, definition.key(), definition.label().dimmed());
        }
        println!();
    }

    Ok(())
}
