//! External tool abstraction for ogh.
//!
//! - [`ExternalTools`] - Trait over the four external operations the core needs
//! - [`ProcessTools`] - Implementation spawning `git` and `gh` with tokio

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::config::ToolPaths;
use crate::error::Result;
use crate::tools::error::ToolError;
use crate::tools::types::{AuthenticatedUser, CommandStatus};

/// Trait for external tool operations (enables mocking in tests).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExternalTools: Send + Sync {
    /// Reads a single value from the git configuration store.
    ///
    /// Returns `None` when the key is absent, the value is empty, or the
    /// store cannot be queried at all.
    async fn config_get(&self, key: &str) -> Result<Option<String>>;

    /// Gets the login name of the current authenticated user.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::IdentityLookup`] with the tool's stderr if the
    /// lookup exits non-zero.
    async fn authenticated_login(&self) -> Result<String>;

    /// Clones `source` into `destination`, forwarding `flags` to git.
    ///
    /// # Errors
    ///
    /// Returns an error only if the tool cannot be started. A failed clone is
    /// reported through the returned status.
    async fn clone_repository(
        &self,
        source: &str,
        destination: &Path,
        flags: &[String],
    ) -> Result<CommandStatus>;

    /// Runs a fast-forward-only pull inside `directory`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the tool cannot be started.
    async fn pull_fast_forward(&self, directory: &Path) -> Result<CommandStatus>;
}

/// External tools implementation spawning real processes.
#[derive(Debug, Clone)]
pub struct ProcessTools {
    git: PathBuf,
    gh: PathBuf,
}

impl ProcessTools {
    /// Creates tools using the given executables.
    #[must_use]
    pub fn new(paths: ToolPaths) -> Self {
        Self {
            git: paths.git,
            gh: paths.gh,
        }
    }

    /// Creates tools from the environment overrides, falling back to `git`
    /// and `gh` on PATH.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ToolPaths::from_env())
    }

    fn command(program: &Path, args: &[&str]) -> Command {
        let mut cmd = Command::new(program);
        cmd.args(args).stdin(Stdio::null()).kill_on_drop(true);
        cmd
    }

    fn spawn_error(program: &Path, err: &std::io::Error) -> ToolError {
        ToolError::Spawn {
            program: program.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl Default for ProcessTools {
    fn default() -> Self {
        Self::new(ToolPaths::default())
    }
}

#[async_trait]
impl ExternalTools for ProcessTools {
    async fn config_get(&self, key: &str) -> Result<Option<String>> {
        tracing::debug!(key, "git config --get");
        let output = Self::command(&self.git, &["config", "--get", key])
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .await;

        let output = match output {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!("configuration store unavailable: {e}");
                return Ok(None);
            }
        };

        if !output.status.success() {
            return Ok(None);
        }

        let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok((!value.is_empty()).then_some(value))
    }

    async fn authenticated_login(&self) -> Result<String> {
        tracing::debug!("gh api user");
        let output = Self::command(&self.gh, &["api", "user"])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| Self::spawn_error(&self.gh, &e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ToolError::IdentityLookup(stderr).into());
        }

        let user = AuthenticatedUser::from_json(&String::from_utf8_lossy(&output.stdout))?;
        Ok(user.login)
    }

    async fn clone_repository(
        &self,
        source: &str,
        destination: &Path,
        flags: &[String],
    ) -> Result<CommandStatus> {
        tracing::debug!(source, destination = %destination.display(), ?flags, "gh repo clone");
        let mut cmd = Self::command(&self.gh, &["repo", "clone", source]);
        cmd.arg(destination);
        if !flags.is_empty() {
            cmd.arg("--").args(flags);
        }

        let status = cmd
            .status()
            .await
            .map_err(|e| Self::spawn_error(&self.gh, &e))?;
        Ok(status.into())
    }

    async fn pull_fast_forward(&self, directory: &Path) -> Result<CommandStatus> {
        tracing::debug!(directory = %directory.display(), "git pull --ff-only");
        let status = Self::command(&self.git, &["pull", "--ff-only"])
            .current_dir(directory)
            .status()
            .await
            .map_err(|e| Self::spawn_error(&self.git, &e))?;
        Ok(status.into())
    }
}
