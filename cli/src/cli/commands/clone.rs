//! Clone command handler for the ogh CLI.

use crate::error::Result;
use crate::tools::ExternalTools;
use crate::workspace::{sync_repository, SyncAction, SyncOptions, WorkspaceRoot};

/// Handles the `ogh clone [-u] <[owner/]repo> [-- <git flags>...]` command.
///
/// The clone/pull output is streamed straight to the terminal; ogh itself
/// only logs which branch was taken.
///
/// # Errors
///
/// Returns an error if the owner cannot be resolved or the clone/pull fails.
pub async fn handle_clone(
    tools: &dyn ExternalTools,
    root: &WorkspaceRoot,
    repository: &str,
    update: bool,
    git_flags: Vec<String>,
) -> Result<()> {
    let options = SyncOptions {
        update,
        clone_flags: git_flags,
    };
    let report = sync_repository(tools, root, repository, &options).await?;

    let location = report.location.display();
    match report.action {
        SyncAction::Cloned => tracing::debug!("cloned {} into {location}", report.spec),
        SyncAction::Updated => tracing::debug!("updated {} in {location}", report.spec),
    }

    Ok(())
}
