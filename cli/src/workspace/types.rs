//! Workspace types for ogh.
//!
//! - [`WorkspaceRoot`] - Absolute directory holding every managed repository
//! - [`RepositorySpec`] - Parsed `owner/name` identifier
//! - [`RepositoryEntry`] - `owner/name` pair found on disk

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};

use crate::config::paths::ends_with_separator;

/// Directory whose presence marks a git working copy.
pub const MARKER: &str = ".git";

/// The workspace root. Always ends with a path separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceRoot {
    path: PathBuf,
}

impl WorkspaceRoot {
    /// Creates a root from an absolute directory path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        debug_assert!(path.is_absolute(), "workspace root must be absolute");

        if ends_with_separator(&path.as_os_str().to_string_lossy()) {
            return Self { path };
        }

        let mut raw = path.into_os_string();
        raw.push(MAIN_SEPARATOR_STR);
        Self {
            path: PathBuf::from(raw),
        }
    }

    /// Root directory, including the trailing separator.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Canonical location of `owner/name`: `<root><owner>/<name>`.
    #[must_use]
    pub fn location(&self, owner: &str, name: &str) -> PathBuf {
        let mut raw = OsString::from(self.path.as_os_str());
        raw.push(owner);
        raw.push("/");
        raw.push(name);
        PathBuf::from(raw)
    }
}

impl fmt::Display for WorkspaceRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// A repository identifier split into owner and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySpec {
    /// Account or organization.
    pub owner: String,
    /// Repository name. May itself contain `/`.
    pub name: String,
}

impl RepositorySpec {
    #[must_use]
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Where this repository lives under `root`.
    #[must_use]
    pub fn location(&self, root: &WorkspaceRoot) -> PathBuf {
        root.location(&self.owner, &self.name)
    }
}

impl fmt::Display for RepositorySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A working copy found at `<root>/<owner>/<name>`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RepositoryEntry {
    pub owner: String,
    pub name: String,
}

impl RepositoryEntry {
    #[must_use]
    pub fn location(&self, root: &WorkspaceRoot) -> PathBuf {
        root.location(&self.owner, &self.name)
    }
}

impl fmt::Display for RepositoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
