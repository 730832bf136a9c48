//! Workspace command handlers for the ogh CLI.
//!
//! - [`handle_root`] - Print the workspace root (`ogh root`)
//! - [`handle_list`] - List cloned repositories (`ogh list`)
//! - [`handle_completions`] - Shell completions (`ogh completions`)

use std::io::{self, Write};

use crate::cli::args::ShellType;
use crate::error::Result;
use crate::workspace::{repositories, RepositoryEntry, WorkspaceRoot};

/// Handles the `ogh root` command.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn handle_root(root: &WorkspaceRoot, json: bool) -> Result<()> {
    let output = format_root(root, json)?;
    writeln!(io::stdout().lock(), "{output}")?;
    Ok(())
}

/// Handles the `ogh list` command.
///
/// Entries are printed in enumeration order.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn handle_list(root: &WorkspaceRoot, json: bool, full_path: bool) -> Result<()> {
    let entries: Vec<RepositoryEntry> = repositories(root).collect();
    tracing::debug!(count = entries.len(), "enumerated repositories");

    let output = format_list(root, &entries, json, full_path)?;
    let mut stdout = io::stdout().lock();
    if !output.is_empty() {
        writeln!(stdout, "{output}")?;
    }
    Ok(())
}

/// Handles the `ogh completions <shell>` command.
///
/// Generates shell completion scripts.
pub fn handle_completions(shell: ShellType) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell};

    let mut cmd = crate::cli::Cli::command();
    let shell = match shell {
        ShellType::Bash => Shell::Bash,
        ShellType::Zsh => Shell::Zsh,
        ShellType::Fish => Shell::Fish,
    };

    generate(shell, &mut cmd, "ogh", &mut io::stdout());

    Ok(())
}

fn format_root(root: &WorkspaceRoot, json: bool) -> Result<String> {
    let path = root.to_string();
    if json {
        Ok(serde_json::to_string(&path)?)
    } else {
        Ok(path)
    }
}

fn format_list(
    root: &WorkspaceRoot,
    entries: &[RepositoryEntry],
    json: bool,
    full_path: bool,
) -> Result<String> {
    let lines: Vec<String> = entries
        .iter()
        .map(|entry| {
            if full_path {
                entry.location(root).display().to_string()
            } else {
                entry.to_string()
            }
        })
        .collect();

    if json {
        Ok(serde_json::to_string(&lines)?)
    } else {
        Ok(lines.join("\n"))
    }
}

#[cfg(all(test, not(windows)))]
mod tests {
    use super::*;

    fn entries() -> Vec<RepositoryEntry> {
        vec![
            RepositoryEntry {
                owner: "alice".to_string(),
                name: "proj1".to_string(),
            },
            RepositoryEntry {
                owner: "bob".to_string(),
                name: "proj3".to_string(),
            },
        ]
    }

    #[test]
    fn root_plain_and_json() {
        let root = WorkspaceRoot::new("/home/alice/ogh");
        assert_eq!(format_root(&root, false).unwrap(), "/home/alice/ogh/");
        assert_eq!(format_root(&root, true).unwrap(), "\"/home/alice/ogh/\"");
    }

    #[test]
    fn list_plain() {
        let root = WorkspaceRoot::new("/ogh");
        assert_eq!(
            format_list(&root, &entries(), false, false).unwrap(),
            "alice/proj1\nbob/proj3"
        );
    }

    #[test]
    fn list_full_path_json() {
        let root = WorkspaceRoot::new("/ogh");
        assert_eq!(
            format_list(&root, &entries(), true, true).unwrap(),
            r#"["/ogh/alice/proj1","/ogh/bob/proj3"]"#
        );
    }

    #[test]
    fn empty_list() {
        let root = WorkspaceRoot::new("/ogh");
        assert_eq!(format_list(&root, &[], false, false).unwrap(), "");
        assert_eq!(format_list(&root, &[], true, false).unwrap(), "[]");
    }
}
