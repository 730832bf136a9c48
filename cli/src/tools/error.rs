//! Tool-specific error types.

use thiserror::Error;

/// Errors raised while talking to external tools.
#[derive(Error, Debug)]
pub enum ToolError {
    /// `gh api user` exited non-zero.
    #[error("Failed to get current authenticated user: {0}")]
    IdentityLookup(String),

    /// `gh api user` succeeded but did not return a `login`.
    #[error("Failed to get current authenticated user: unexpected response: {0}")]
    MalformedIdentity(String),

    /// The executable could not be started at all.
    #[error("Failed to run '{program}': {message}. Is it installed and on PATH?")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// OS error message.
        message: String,
    },
}

impl ToolError {
    /// Checks if the failed invocation may be repeated safely.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::IdentityLookup(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_lookup_carries_diagnostic() {
        let err = ToolError::IdentityLookup("HTTP 401: Bad credentials".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to get current authenticated user: HTTP 401: Bad credentials"
        );
        assert!(err.is_retriable());
    }

    #[test]
    fn spawn_names_program() {
        let err = ToolError::Spawn {
            program: "gh".to_string(),
            message: "No such file or directory".to_string(),
        };
        assert!(err.to_string().contains("'gh'"));
        assert!(!err.is_retriable());
    }

    #[test]
    fn malformed_identity_is_not_retriable() {
        let err = ToolError::MalformedIdentity("{}".to_string());
        assert!(!err.is_retriable());
    }
}
