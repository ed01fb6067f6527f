mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    add, blocks, new_template, rename, render, tree, validate, AddArgs, BlocksArgs, NewArgs,
    RenameArgs, RenderArgs, TreeArgs, ValidateArgs,
};
use config::Config;
use tracing_subscriber::EnvFilter;

/// Recruitify CLI - careers page templates from the command line
#[derive(Parser, Debug)]
#[command(name = "recruitify")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a template, optionally seeded with blocks
    New(NewArgs),

    /// Drop a new block into a saved template
    Add(AddArgs),

    /// Change a template's title and description
    Rename(RenameArgs),

    /// Render a template to static HTML
    Render(RenderArgs),

    /// Check a template for structural problems
    Validate(ValidateArgs),

    /// Print the node outline of a template
    Tree(TreeArgs),

    /// List the block palette
    Blocks(BlocksArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(command: Command) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = Config::load(&cwd)?;

    match command {
        Command::New(args) => new_template(args, &config, &cwd).await,
        Command::Add(args) => add(args, &config, &cwd).await,
        Command::Rename(args) => rename(args, &config, &cwd).await,
        Command::Render(args) => render(args, &config, &cwd).await,
        Command::Validate(args) => validate(args, &config, &cwd).await,
        Command::Tree(args) => tree(args, &config, &cwd).await,
        Command::Blocks(args) => blocks(args),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli.command).await {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
