//! CLI module for ogh.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, ShellType};
