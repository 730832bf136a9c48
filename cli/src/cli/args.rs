//! Command-line argument parsing.

use clap::{Parser, Subcommand, ValueEnum};

/// Organize GitHub repositories under a single root.
///
/// Repositories are cloned to `<root>/<owner>/<repo>`. The root is read from
/// `git config ogh.root` and defaults to `~/ogh`.
#[derive(Parser, Debug)]
#[command(name = "ogh")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the workspace root directory.
    Root {
        /// Print as a JSON string.
        #[arg(long)]
        json: bool,
    },

    /// List repositories cloned under the workspace root.
    ///
    /// Only `<owner>/<repo>` directories containing a `.git` entry are
    /// listed. Output is not sorted.
    List {
        /// Print as a JSON array.
        #[arg(long)]
        json: bool,

        /// Print full paths instead of `<owner>/<repo>`.
        #[arg(short = 'p', long)]
        full_path: bool,
    },

    /// Clone a repository into `<root>/<owner>/<repo>`.
    ///
    /// When the owner is omitted, the current GitHub user is used.
    Clone {
        /// Repository to clone, as `[<owner>/]<repo>`.
        #[arg(value_name = "[OWNER/]REPO")]
        repository: String,

        /// Pull (fast-forward only) if the repository is already cloned.
        #[arg(short, long)]
        update: bool,

        /// Additional flags passed to `git clone`.
        #[arg(last = true, value_name = "GIT_FLAGS")]
        git_flags: Vec<String>,
    },

    /// Generate shell completion scripts.
    ///
    /// Outputs completion script for the specified shell.
    /// Follow shell-specific instructions to install.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: ShellType,
    },
}

/// Supported shell types for completions.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
}
