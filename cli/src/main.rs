//! ogh - Organize GitHub repositories
//!
//! ogh keeps every repository you work on under a single root, cloned to a
//! deterministic `<owner>/<repo>` path. Cloning and updating are delegated
//! to `gh` and `git`.

mod cli;
mod config;
mod error;
mod tools;
mod workspace;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::config::settings::env;
use crate::error::Result;
use crate::tools::ProcessTools;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(env::LOG_LEVEL)
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Run the command
    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Commands::Completions { shell } = cli.command {
        return cli::commands::handle_completions(shell);
    }

    let tools = ProcessTools::from_env();
    let root = config::resolve_root(&tools).await?;

    match cli.command {
        Commands::Root { json } => cli::commands::handle_root(&root, json),
        Commands::List { json, full_path } => cli::commands::handle_list(&root, json, full_path),
        Commands::Clone {
            repository,
            update,
            git_flags,
        } => cli::commands::handle_clone(&tools, &root, &repository, update, git_flags).await,
        Commands::Completions { .. } => Ok(()),
    }
}
