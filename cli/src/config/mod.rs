//! Configuration management for ogh.

pub mod paths;
pub mod settings;

pub use paths::{ensure_trailing_separator, expand_home};
pub use settings::{ToolPaths, DEFAULT_ROOT, ROOT_CONFIG_KEY};

use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::tools::ExternalTools;
use crate::workspace::WorkspaceRoot;

/// Resolve the workspace root from `git config ogh.root`.
///
/// Falls back to [`DEFAULT_ROOT`] when the key is absent or the store cannot
/// be read.
///
/// # Errors
///
/// Returns an error only if home expansion fails, or if the root is relative
/// and the working directory cannot be determined.
pub async fn resolve_root(tools: &dyn ExternalTools) -> Result<WorkspaceRoot> {
    let raw = match tools.config_get(ROOT_CONFIG_KEY).await {
        Ok(Some(value)) => value,
        Ok(None) => DEFAULT_ROOT.to_string(),
        Err(e) => {
            tracing::debug!("failed to read {ROOT_CONFIG_KEY}: {e}");
            DEFAULT_ROOT.to_string()
        }
    };

    let root = root_from_expanded(&expand_home(&raw)?, std::env::current_dir)?;
    tracing::debug!(root = %root, "resolved workspace root");
    Ok(root)
}

/// Normalize a home-expanded root into a [`WorkspaceRoot`].
///
/// `cwd` is only called when `expanded` is relative.
pub fn root_from_expanded(
    expanded: &str,
    cwd: impl FnOnce() -> io::Result<PathBuf>,
) -> Result<WorkspaceRoot> {
    let expanded = ensure_trailing_separator(expanded);
    let path = Path::new(&expanded);
    if path.is_absolute() {
        return Ok(WorkspaceRoot::new(path));
    }
    Ok(WorkspaceRoot::new(cwd()?.join(path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::expand_home_with;
    use crate::tools::{MockExternalTools, ToolError};

    fn no_cwd() -> io::Result<PathBuf> {
        Err(io::Error::new(io::ErrorKind::NotFound, "working directory removed"))
    }

    fn home() -> String {
        std::env::var(paths::HOME_VAR).expect("home variable set in test environment")
    }

    #[cfg(not(windows))]
    #[tokio::test]
    async fn configured_root_is_used() {
        let mut tools = MockExternalTools::new();
        tools
            .expect_config_get()
            .withf(|key| key == "ogh.root")
            .times(1)
            .returning(|_| Ok(Some("/srv/repos".to_string())));

        let root = resolve_root(&tools).await.unwrap();
        assert_eq!(root.to_string(), "/srv/repos/");
    }

    #[cfg(not(windows))]
    #[tokio::test]
    async fn absent_key_falls_back_to_default() {
        let mut tools = MockExternalTools::new();
        tools.expect_config_get().times(1).returning(|_| Ok(None));

        let root = resolve_root(&tools).await.unwrap();
        assert_eq!(root.to_string(), format!("{}/ogh/", home()));
    }

    #[cfg(not(windows))]
    #[tokio::test]
    async fn store_failure_falls_back_to_default() {
        let mut tools = MockExternalTools::new();
        tools.expect_config_get().times(1).returning(|_| {
            Err(ToolError::Spawn {
                program: "git".to_string(),
                message: "not found".to_string(),
            }
            .into())
        });

        let root = resolve_root(&tools).await.unwrap();
        assert_eq!(root.to_string(), format!("{}/ogh/", home()));
    }

    #[cfg(not(windows))]
    #[test]
    fn relative_root_is_resolved_against_cwd() {
        let root = root_from_expanded("repos", || Ok(PathBuf::from("/work"))).unwrap();
        assert_eq!(root.to_string(), "/work/repos/");
        assert!(root.path().is_absolute());
    }

    #[cfg(not(windows))]
    #[test]
    fn absolute_root_does_not_need_cwd() {
        let root = root_from_expanded("/srv/repos", no_cwd).unwrap();
        assert_eq!(root.to_string(), "/srv/repos/");

        let root = root_from_expanded("/srv/repos/", no_cwd).unwrap();
        assert_eq!(root.to_string(), "/srv/repos/");
    }

    #[test]
    fn relative_root_without_cwd_fails() {
        assert!(root_from_expanded("repos", no_cwd).is_err());
    }

    #[cfg(not(windows))]
    #[test]
    fn tilde_root_expands_to_home() {
        let expanded = expand_home_with("~/ogh", Some("/home/alice")).unwrap();
        let root = root_from_expanded(&expanded, no_cwd).unwrap();
        assert_eq!(root.to_string(), "/home/alice/ogh/");
    }
}
