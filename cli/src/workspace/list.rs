//! Enumeration of working copies under the workspace root.
//!
//! The walk is lazy and reads the filesystem fresh on every call. It is not a
//! snapshot: entries created or removed while iterating may or may not show
//! up. Order follows `read_dir` and is not sorted.

use std::fs::{self, DirEntry, ReadDir};
use std::io;
use std::path::{Path, PathBuf};

use crate::workspace::types::{RepositoryEntry, WorkspaceRoot, MARKER};

/// Iterates `<root>/<owner>/<name>` directories that contain a [`MARKER`].
///
/// A missing root yields nothing. Entries that are not directories, have
/// non-UTF-8 names, or cannot be read are skipped.
#[must_use]
pub fn repositories(root: &WorkspaceRoot) -> Repositories {
    Repositories {
        owners: read_dir(root.path()),
        current: None,
    }
}

/// Lazy iterator returned by [`repositories`].
#[derive(Debug)]
pub struct Repositories {
    owners: Option<ReadDir>,
    current: Option<OwnerDir>,
}

#[derive(Debug)]
struct OwnerDir {
    owner: String,
    entries: ReadDir,
}

impl OwnerDir {
    fn open(entry: io::Result<DirEntry>) -> Option<Self> {
        let (owner, path) = directory(entry)?;
        let entries = read_dir(&path)?;
        Some(Self { owner, entries })
    }

    fn next_repository(&mut self) -> Option<RepositoryEntry> {
        for entry in self.entries.by_ref() {
            let Some((name, path)) = directory(entry) else {
                continue;
            };
            if path.join(MARKER).exists() {
                return Some(RepositoryEntry {
                    owner: self.owner.clone(),
                    name,
                });
            }
        }
        None
    }
}

impl Iterator for Repositories {
    type Item = RepositoryEntry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(current) = self.current.as_mut() {
                if let Some(entry) = current.next_repository() {
                    return Some(entry);
                }
                self.current = None;
            }

            let owners = self.owners.as_mut()?;
            match owners.next() {
                Some(entry) => self.current = OwnerDir::open(entry),
                None => {
                    self.owners = None;
                    return None;
                }
            }
        }
    }
}

fn read_dir(path: &Path) -> Option<ReadDir> {
    match fs::read_dir(path) {
        Ok(entries) => Some(entries),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            tracing::warn!("Skipping {}: {e}", path.display());
            None
        }
    }
}

/// Name and path of `entry` if it is a directory with a UTF-8 name.
fn directory(entry: io::Result<DirEntry>) -> Option<(String, PathBuf)> {
    let entry = match entry {
        Ok(entry) => entry,
        Err(e) => {
            tracing::debug!("Skipping unreadable entry: {e}");
            return None;
        }
    };

    let path = entry.path();
    if !path.is_dir() {
        return None;
    }

    match entry.file_name().into_string() {
        Ok(name) => Some((name, path)),
        Err(name) => {
            tracing::debug!("Skipping non UTF-8 name {name:?}");
            None
        }
    }
}
