//! External tool invocations for ogh.
//!
//! All version-control and network work is delegated to command-line tools:
//! - `git config` - workspace root lookup
//! - `gh api user` - current authenticated user
//! - `gh repo clone` - fresh clones
//! - `git pull --ff-only` - updates of existing clones

pub mod error;
pub mod operations;
pub mod types;

pub use error::ToolError;
pub use operations::{ExternalTools, ProcessTools};
#[allow(unused_imports)]
pub use types::{AuthenticatedUser, CommandStatus};

#[cfg(test)]
pub use operations::MockExternalTools;
