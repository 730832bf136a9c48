//! Tool-related types for ogh.
//!
//! - [`CommandStatus`] - Exit status of a finished external command
//! - [`AuthenticatedUser`] - Payload of `gh api user`

use serde::Deserialize;

use crate::tools::error::ToolError;

/// Exit status of an external command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Exit code, `None` if the process was killed by a signal.
    pub code: Option<i32>,
}

impl CommandStatus {
    /// Creates a status from an exit code.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Returns true if the command exited with code 0.
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }
}

impl From<std::process::ExitStatus> for CommandStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        status.code().map_or(Self { code: None }, Self::from_code)
    }
}

/// The current authenticated GitHub user.
///
/// Only `login` is read; the rest of the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticatedUser {
    /// Account name.
    pub login: String,
}

impl AuthenticatedUser {
    /// Parses the JSON printed by `gh api user`.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::MalformedIdentity`] if the payload is not an
    /// object with a string `login` field, or the login is not usable as a
    /// single directory name.
    pub fn from_json(payload: &str) -> Result<Self, ToolError> {
        let payload = payload.trim();
        let user: Self = serde_json::from_str(payload)
            .map_err(|_| ToolError::MalformedIdentity(payload.to_string()))?;
        user.validate().map_err(|_| ToolError::MalformedIdentity(payload.to_string()))?;
        Ok(user)
    }

    /// Checks that `login` is non-empty and has no path separator.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::MalformedIdentity`] naming the rejected login.
    pub fn validate(&self) -> Result<(), ToolError> {
        if self.login.is_empty() || self.login.contains(std::path::is_separator) {
            return Err(ToolError::MalformedIdentity(format!(
                "invalid login '{}'",
                self.login
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_status_success() {
        assert!(CommandStatus::from_code(0).success());
        assert!(!CommandStatus::from_code(1).success());
        assert!(!CommandStatus { code: None }.success());
    }

    #[test]
    fn parses_login_and_ignores_other_fields() {
        let user = AuthenticatedUser::from_json(
            r#"{"login":"alice","id":42,"name":"Alice","site_admin":false}"#,
        )
        .unwrap();
        assert_eq!(user.login, "alice");
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let user = AuthenticatedUser::from_json("\n  {\"login\": \"bob\"}\n").unwrap();
        assert_eq!(user.login, "bob");
    }

    #[test]
    fn rejects_missing_login() {
        let err = AuthenticatedUser::from_json(r#"{"id":1}"#).unwrap_err();
        assert!(matches!(err, ToolError::MalformedIdentity(_)));
    }

    #[test]
    fn rejects_non_string_login() {
        let err = AuthenticatedUser::from_json(r#"{"login":7}"#).unwrap_err();
        assert!(matches!(err, ToolError::MalformedIdentity(_)));
    }

    #[test]
    fn rejects_empty_login() {
        let err = AuthenticatedUser::from_json(r#"{"login":""}"#).unwrap_err();
        assert!(matches!(err, ToolError::MalformedIdentity(_)));
    }

    #[test]
    fn rejects_login_with_separator() {
        let err = AuthenticatedUser::from_json(r#"{"login":"alice/evil"}"#).unwrap_err();
        assert!(matches!(err, ToolError::MalformedIdentity(_)));
    }

    #[test]
    fn rejects_non_json() {
        assert!(AuthenticatedUser::from_json("not json").is_err());
    }
}
