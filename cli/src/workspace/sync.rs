//! Clone-or-update of a single repository into its canonical location.

use std::path::PathBuf;

use crate::error::Result;
use crate::tools::ExternalTools;
use crate::workspace::error::WorkspaceError;
use crate::workspace::parse::parse_repository;
use crate::workspace::types::{RepositorySpec, WorkspaceRoot};

/// Options for [`sync_repository`].
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Pull instead of clone when the location already exists.
    pub update: bool,

    /// Extra flags forwarded to `git clone`.
    pub clone_flags: Vec<String>,
}

/// Which external operation ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// `gh repo clone` created the working copy.
    Cloned,
    /// `git pull --ff-only` updated an existing working copy.
    Updated,
}

/// Result of a successful [`sync_repository`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Parsed owner and name.
    pub spec: RepositorySpec,
    /// Canonical directory of the repository.
    pub location: PathBuf,
    /// Operation that ran.
    pub action: SyncAction,
}

/// Clones `identifier` into `<root>/<owner>/<name>`, or pulls it if
/// `options.update` is set and the directory already exists.
///
/// Without `update` the clone always runs; refusing to overwrite an existing
/// directory is left to the clone tool. Success is the tool's zero exit
/// status and nothing is rolled back on failure.
///
/// # Errors
///
/// Returns an error if the identifier cannot be parsed, a tool cannot be
/// started, or the clone/pull exits non-zero
/// ([`WorkspaceError::CloneFailed`] / [`WorkspaceError::PullFailed`]).
pub async fn sync_repository(
    tools: &dyn ExternalTools,
    root: &WorkspaceRoot,
    identifier: &str,
    options: &SyncOptions,
) -> Result<SyncReport> {
    let spec = parse_repository(identifier, tools).await?;
    let location = spec.location(root);

    if options.update && is_dir(&location).await {
        tracing::info!("Updating {spec} in {}", location.display());
        let status = tools.pull_fast_forward(&location).await?;
        if !status.success() {
            return Err(WorkspaceError::PullFailed {
                owner: spec.owner,
                name: spec.name,
                location,
            }
            .into());
        }
        return Ok(SyncReport {
            spec,
            location,
            action: SyncAction::Updated,
        });
    }

    tracing::info!("Cloning {spec} into {}", location.display());
    let status = tools
        .clone_repository(identifier, &location, &options.clone_flags)
        .await?;
    if !status.success() {
        return Err(WorkspaceError::CloneFailed {
            owner: spec.owner,
            name: spec.name,
            location,
        }
        .into());
    }

    Ok(SyncReport {
        spec,
        location,
        action: SyncAction::Cloned,
    })
}

async fn is_dir(path: &std::path::Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
}
