//! Command implementations.

pub mod clone;
pub mod workspace;

pub use clone::handle_clone;
pub use workspace::{handle_completions, handle_list, handle_root};
