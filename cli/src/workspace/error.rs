//! Workspace-specific error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors specific to repository addressing and synchronization.
#[derive(Error, Debug)]
pub enum WorkspaceError {
    /// Repository identifier is empty or has an empty component.
    #[error("Invalid repository '{identifier}': {reason}. Expected [<owner>/]<repo>.")]
    InvalidSpec {
        /// Identifier as supplied by the caller.
        identifier: String,
        /// What is wrong with it.
        reason: String,
    },

    /// `gh repo clone` exited non-zero.
    #[error("Failed to clone {owner}/{name} into {}", location.display())]
    CloneFailed {
        /// Repository owner.
        owner: String,
        /// Repository name.
        name: String,
        /// Clone destination.
        location: PathBuf,
    },

    /// `git pull --ff-only` exited non-zero.
    #[error("Failed to pull {owner}/{name} in {}", location.display())]
    PullFailed {
        /// Repository owner.
        owner: String,
        /// Repository name.
        name: String,
        /// Working copy that was pulled.
        location: PathBuf,
    },
}

impl WorkspaceError {
    /// Checks if this is a clone or pull failure.
    #[must_use]
    pub const fn is_sync_failure(&self) -> bool {
        matches!(self, Self::CloneFailed { .. } | Self::PullFailed { .. })
    }

    /// Only a fast-forward pull can be repeated without side effects.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::PullFailed { .. })
    }
}
