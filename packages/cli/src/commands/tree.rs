use super::load_document;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use recruitify_blocks::Registry;
use recruitify_common::BuilderNode;
use std::path::Path;

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Template id or path to a document `.json` file
    pub input: String,
}

pub async fn tree(args: TreeArgs, config: &Config, cwd: &Path) -> Result<()> {
    let tree = load_document(&args.input, config, cwd).await?;
    print!("{}", outline(&tree, &Registry::standard()));
    Ok(())
}

/// One line per node, two spaces of indent per level
fn outline(tree: &BuilderNode, registry: &Registry) -> String {
    let mut out = String::new();
    write_node(tree, registry, 0, &mut out);
    out
}

fn write_node(node: &BuilderNode, registry: &Registry, depth: usize, out: &mut String) {
    let label = match registry.get(&node.node_type) {
        Some(definition) => definition.label().to_string(),
        None if node.is_root() => "Page".to_string(),
        None => "unknown".red().to_string(),
    };

    out.push_str(&"  ".repeat(depth));
    out.push_str(&format!(
        "{} {} {}\n",
        node.node_type.bold(),
        label,
        node.id.dimmed()
    ));

    for child in node.children() {
        write_node(child, registry, depth + 1, out);
    }
}
