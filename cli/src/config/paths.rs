//! Path normalization for the workspace root.
//!
//! Pure string transformations; the only environment access is the home
//! directory lookup in [`expand_home`].

use std::path::{is_separator, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

use crate::error::{OghError, Result};

/// Environment variable holding the user's home directory.
#[cfg(windows)]
pub const HOME_VAR: &str = "USERPROFILE";
/// Environment variable holding the user's home directory.
#[cfg(not(windows))]
pub const HOME_VAR: &str = "HOME";

/// Replace a leading `~` segment with the user's home directory.
///
/// `~user` forms are left untouched.
///
/// # Errors
///
/// Returns [`OghError::Config`] if the path starts with `~` and the home
/// variable is unset.
pub fn expand_home(path: &str) -> Result<String> {
    let home = std::env::var(HOME_VAR).ok();
    expand_home_with(path, home.as_deref())
}

/// [`expand_home`] with an explicit home directory (`None` = unset).
pub fn expand_home_with(path: &str, home: Option<&str>) -> Result<String> {
    let mut segments = path.split(is_separator);
    if segments.next() != Some("~") {
        return Ok(path.to_string());
    }

    let home = home.ok_or_else(|| {
        OghError::Config(format!(
            "Cannot expand '~': {HOME_VAR} environment variable is not set"
        ))
    })?;

    Ok(std::iter::once(home)
        .chain(segments)
        .collect::<Vec<_>>()
        .join(MAIN_SEPARATOR_STR))
}

/// Append the platform separator unless the path already ends with a
/// separator (`/` or `\` on Windows).
#[must_use]
pub fn ensure_trailing_separator(path: &str) -> String {
    if ends_with_separator(path) {
        path.to_string()
    } else {
        format!("{path}{MAIN_SEPARATOR}")
    }
}

/// True if the last character is a path separator for this platform.
#[must_use]
pub fn ends_with_separator(path: &str) -> bool {
    path.chars().next_back().is_some_and(is_separator)
}
