//! Run configuration for the make-labels CLI.
//!
//! Everything the run depends on is resolved once at startup into a
//! [`SyncConfig`]: the parsed command-line arguments plus the access token
//! taken from the environment. Nothing downstream reads arguments or
//! environment variables directly.

use std::path::PathBuf;

use make_labels_core::RepositoryId;
use secrecy::SecretString;
use tracing::debug;

use crate::{args::Cli, errors::Error};

/// Environment variable holding the GitHub access token.
pub const TOKEN_ENV_VAR: &str = "OCTOKIT_ACCESS_TOKEN";

/// Checked when [`TOKEN_ENV_VAR`] is not set.
pub const FALLBACK_TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Configuration for a single synchronisation run.
#[derive(Debug)]
pub struct SyncConfig {
    /// Repository whose labels are synchronised
    pub repository: RepositoryId,

    /// Path of the JSON label file
    pub labels_path: PathBuf,

    /// GitHub access token; `None` means unauthenticated requests
    pub token: Option<SecretString>,

    /// Overrides the GitHub API base URL
    pub api_base_url: Option<String>,

    /// Exit non-zero when any label fails
    pub strict: bool,
}

impl SyncConfig {
    /// Builds the configuration from parsed arguments and the process environment.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArguments` unless exactly one repository
    /// argument of the form `owner/repo` was given.
    pub fn from_cli(cli: &Cli) -> Result<Self, Error> {
        Self::from_cli_with_token(cli, resolve_token())
    }

    /// Same as [`SyncConfig::from_cli`] with an explicitly supplied token.
    pub fn from_cli_with_token(cli: &Cli, token: Option<SecretString>) -> Result<Self, Error> {
        let repository = match cli.repository.as_slice() {
            [repository] => RepositoryId::parse(repository)
                .map_err(|e| Error::InvalidArguments(e.to_string()))?,
            [] => {
                return Err(Error::InvalidArguments(
                    "missing <owner>/<repository> argument".to_string(),
                ))
            }
            _ => {
                return Err(Error::InvalidArguments(
                    "expected exactly one <owner>/<repository> argument".to_string(),
                ))
            }
        };

        Ok(Self {
            repository,
            labels_path: cli.json.clone(),
            token,
            api_base_url: cli.api_url.clone(),
            strict: cli.strict,
        })
    }
}

/// Reads the access token from the process environment.
pub fn resolve_token() -> Option<SecretString> {
    resolve_token_with(|name| std::env::var(name).ok())
}

/// Looks up the access token through `lookup`, trying [`TOKEN_ENV_VAR`] first
/// and then [`FALLBACK_TOKEN_ENV_VAR`]. Blank values count as unset.
pub fn resolve_token_with<F>(lookup: F) -> Option<SecretString>
where
    F: Fn(&str) -> Option<String>,
{
    [TOKEN_ENV_VAR, FALLBACK_TOKEN_ENV_VAR]
        .into_iter()
        .find_map(|name| {
            let value = lookup(name).filter(|v| !v.trim().is_empty())?;
            debug!(variable = name, "Using access token from environment");
            Some(SecretString::from(value))
        })
}
