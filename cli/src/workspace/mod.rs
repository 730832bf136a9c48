//! Workspace management for ogh.
//!
//! The workspace is a single root directory holding clones at
//! `<root>/<owner>/<name>`:
//! - Parse `[<owner>/]<repo>` identifiers
//! - Enumerate the working copies already present
//! - Clone or update a repository into its canonical location

pub mod error;
pub mod list;
pub mod parse;
pub mod sync;
pub mod types;

pub use error::WorkspaceError;
#[allow(unused_imports)]
pub use list::{repositories, Repositories};
#[allow(unused_imports)]
pub use parse::parse_repository;
#[allow(unused_imports)]
pub use sync::{sync_repository, SyncAction, SyncOptions, SyncReport};
#[allow(unused_imports)]
pub use types::{RepositoryEntry, RepositorySpec, WorkspaceRoot, MARKER};
