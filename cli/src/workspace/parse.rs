//! Repository identifier parsing.
//!
//! Identifiers have the form `[<owner>/]<repo>`. When the owner is omitted it
//! is filled in from the current authenticated user.

use crate::error::Result;
use crate::tools::{AuthenticatedUser, ExternalTools};
use crate::workspace::error::WorkspaceError;
use crate::workspace::types::RepositorySpec;

/// Parses `identifier` into owner and name.
///
/// Splits at the first `/`; anything after it, including further slashes,
/// is the name. Without a `/` the owner is looked up with a single call to
/// [`ExternalTools::authenticated_login`]. The lookup is not retried.
///
/// # Errors
///
/// Returns [`WorkspaceError::InvalidSpec`] for an empty identifier or an
/// empty owner or name, and the lookup's error if the owner cannot be
/// resolved.
pub async fn parse_repository(
    identifier: &str,
    tools: &dyn ExternalTools,
) -> Result<RepositorySpec> {
    if let Some(spec) = split_identifier(identifier)? {
        return Ok(spec);
    }

    let user = AuthenticatedUser {
        login: tools.authenticated_login().await?,
    };
    user.validate()?;
    tracing::debug!(login = %user.login, "resolved owner from authenticated user");
    Ok(RepositorySpec::new(user.login, identifier))
}

/// Splits an identifier that names its owner.
///
/// Returns `Ok(None)` if there is no `/` and the owner must be looked up.
pub fn split_identifier(identifier: &str) -> Result<Option<RepositorySpec>> {
    if identifier.is_empty() {
        return Err(invalid(identifier, "identifier is empty"));
    }

    let Some((owner, name)) = identifier.split_once('/') else {
        return Ok(None);
    };

    if owner.is_empty() {
        return Err(invalid(identifier, "owner is empty"));
    }
    if name.is_empty() {
        return Err(invalid(identifier, "repository name is empty"));
    }

    Ok(Some(RepositorySpec::new(owner, name)))
}

fn invalid(identifier: &str, reason: &str) -> crate::error::OghError {
    WorkspaceError::InvalidSpec {
        identifier: identifier.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
