//! Application configuration settings.

use std::path::PathBuf;

/// Git configuration key holding the workspace root.
pub const ROOT_CONFIG_KEY: &str = "ogh.root";

/// Workspace root used when [`ROOT_CONFIG_KEY`] is not set.
pub const DEFAULT_ROOT: &str = "~/ogh";

/// Environment variables that can override configuration.
pub mod env {
    pub const GIT: &str = "OGH_GIT";
    pub const GH: &str = "OGH_GH";
    pub const LOG_LEVEL: &str = "OGH_LOG";
}

/// Executables used for external operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    /// git executable.
    pub git: PathBuf,
    /// GitHub CLI executable.
    pub gh: PathBuf,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            git: PathBuf::from("git"),
            gh: PathBuf::from("gh"),
        }
    }
}

impl ToolPaths {
    /// Default paths with environment variable overrides applied.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides looked up through `var`. Empty values are ignored.
    #[must_use]
    pub fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(git) = var(env::GIT).filter(|v| !v.is_empty()) {
            self.git = PathBuf::from(git);
        }

        if let Some(gh) = var(env::GH).filter(|v| !v.is_empty()) {
            self.gh = PathBuf::from(gh);
        }

        self
    }
}
