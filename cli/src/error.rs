//! Error types and result aliases for ogh.
//!
//! Every failure is terminal for the single operation that raised it. Errors
//! carry enough context (owner, name, location, external diagnostics) to be
//! printed to the operator as-is.

use thiserror::Error;

use crate::tools::ToolError;
use crate::workspace::WorkspaceError;

/// Main error type for ogh operations.
#[derive(Error, Debug)]
pub enum OghError {
    /// The workspace root could not be determined.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("Data serialization error: {0}")]
    Serialization(String),

    /// Repository identifier or synchronization error.
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),

    /// External tool error.
    #[error(transparent)]
    Tool(#[from] ToolError),
}

#[allow(dead_code)] // Kept for callers that batch or retry syncs
impl OghError {
    /// Checks if this error came from a failed clone or pull.
    #[must_use]
    pub const fn is_sync_failure(&self) -> bool {
        matches!(self, Self::Workspace(e) if e.is_sync_failure())
    }

    /// Checks if repeating the failed operation is safe.
    ///
    /// Identity lookups and fast-forward pulls are idempotent. A clone that
    /// failed may have left a partial directory behind, so it is not.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        match self {
            Self::Workspace(e) => e.is_retriable(),
            Self::Tool(e) => e.is_retriable(),
            _ => false,
        }
    }
}

/// Result type alias using [`OghError`].
pub type Result<T> = std::result::Result<T, OghError>;

impl From<serde_json::Error> for OghError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(format!("JSON error: {err}"))
    }
}
