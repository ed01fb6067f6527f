use super::load_document;
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use recruitify_compiler_html::compile_to_html;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Template id or path to a document `.json` file
    pub input: String,

    /// Write HTML here instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Emit only the page markup, without `<html>` and `<head>`
    #[arg(long)]
    pub fragment: bool,
}

pub async fn render(args: RenderArgs, config: &Config, cwd: &Path) -> Result<()> {
    let tree = load_document(&args.input, config, cwd).await?;

    let mut options = config.html.compile_options();
    options.full_document = !args.fragment;
    let html = compile_to_html(&tree, &options)?;

    match args.out {
        Some(out) => {
            let out = cwd.join(out);
            if let Some(parent) = out.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&out, &html).with_context(|| format!("Failed to write {}", out.display()))?;
            eprintln!("{} {}", "✓".green(), out.display());
        }
        None => print!("{}", html),
    }

    Ok(())
}
