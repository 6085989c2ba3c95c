//! Crate for interacting with the GitHub REST API label endpoints.
//!
//! This crate provides a client for making requests to GitHub using a personal
//! access token, and the [`LabelClient`] trait that label reconciliation is
//! written against.

use async_trait::async_trait;
use octocrab::{Octocrab, Result as OctocrabResult};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

pub mod errors;
pub use errors::Error;

pub mod label;
pub use label::{Label, LabelCreatePayload, LabelUpdatePayload};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Number of labels requested by [`LabelClient::list_labels`].
///
/// Only a single page is fetched; repositories with more labels than this see
/// the first page only.
pub const LABELS_PER_PAGE: u8 = 100;

/// Operations on the labels of a single repository.
///
/// This is the seam between the reconciliation logic and GitHub: the
/// [`GitHubClient`] implements it on top of octocrab, tests implement it with
/// in-memory mocks.
#[async_trait]
pub trait LabelClient: Send + Sync {
    /// Lists the labels currently defined on `owner/repo`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the repository does not exist or is not
    /// visible with the current credentials, or another [`Error`] variant if
    /// the API call fails.
    async fn list_labels(&self, owner: &str, repo: &str) -> Result<Vec<Label>, Error>;

    /// Creates a label on `owner/repo`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if GitHub rejects the label (for instance
    /// because a label with the same name already exists).
    async fn create_label(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        color: &str,
        description: &str,
    ) -> Result<Label, Error>;

    /// Updates the color and description of the label called `name`.
    ///
    /// GitHub resolves `name` case-insensitively. The name itself is never
    /// changed.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no label with that name exists.
    async fn update_label(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        color: &str,
        description: &str,
    ) -> Result<Label, Error>;
}

/// A client for interacting with the GitHub API.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Creates a new `GitHubClient` from an already configured `Octocrab` instance.
    ///
    /// Use [`create_token_client`] to build the `Octocrab` instance.
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

#[derive(Serialize)]
struct ListLabelsParams {
    per_page: u8,
}

#[async_trait]
impl LabelClient for GitHubClient {
    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn list_labels(&self, owner: &str, repo: &str) -> Result<Vec<Label>, Error> {
        let path = format!("/repos/{}/{}/labels", owner, repo);
        let params = ListLabelsParams {
            per_page: LABELS_PER_PAGE,
        };

        debug!("Making API call to: {}", path);
        let response: OctocrabResult<Vec<Label>> = self.client.get(path, Some(&params)).await;
        match response {
            Ok(labels) => {
                info!(count = labels.len(), "Retrieved repository labels");
                Ok(labels)
            }
            Err(e) => Err(convert_octocrab_error("Failed to list labels", e)),
        }
    }

    #[instrument(skip(self, color, description), fields(owner = %owner, repo = %repo, label = %name))]
    async fn create_label(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        color: &str,
        description: &str,
    ) -> Result<Label, Error> {
        let path = format!("/repos/{}/{}/labels", owner, repo);
        let payload = LabelCreatePayload {
            name: name.to_string(),
            color: color.to_string(),
            description: description.to_string(),
        };

        let response: OctocrabResult<Label> = self.client.post(path, Some(&payload)).await;
        match response {
            Ok(label) => {
                info!("Label created");
                Ok(label)
            }
            Err(e) => Err(convert_octocrab_error("Failed to create label", e)),
        }
    }

    #[instrument(skip(self, color, description), fields(owner = %owner, repo = %repo, label = %name))]
    async fn update_label(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        color: &str,
        description: &str,
    ) -> Result<Label, Error> {
        let path = label_path(owner, repo, name);
        let payload = LabelUpdatePayload {
            color: color.to_string(),
            description: description.to_string(),
        };

        let response: OctocrabResult<Label> = self.client.patch(path, Some(&payload)).await;
        match response {
            Ok(label) => {
                info!("Label updated");
                Ok(label)
            }
            Err(e) => Err(convert_octocrab_error("Failed to update label", e)),
        }
    }
}

/// Builds the route of a single label. Label names may contain spaces and
/// other characters that are not valid in a URI path.
fn label_path(owner: &str, repo: &str, name: &str) -> String {
    format!(
        "/repos/{}/{}/labels/{}",
        owner,
        repo,
        urlencoding::encode(name)
    )
}

/// Creates an `Octocrab` client authenticated with a personal access token.
///
/// When `token` is `None` the client is built without credentials. No request
/// is made here, so a missing token only shows up later as failing API calls.
///
/// # Arguments
///
/// * `token` - The access token, if one is available.
/// * `base_uri` - Overrides the GitHub API base URL (GitHub Enterprise, test servers).
///
/// # Errors
///
/// Returns an `Error::AuthError` if the base URL cannot be parsed or the
/// client cannot be built.
///
/// # Example
///
/// ```rust,no_run
/// use github_client::{create_token_client, GitHubClient};
/// use secrecy::SecretString;
///
/// # fn example() -> Result<(), github_client::Error> {
/// let token = SecretString::from("ghp_example".to_string());
/// let octocrab = create_token_client(Some(&token), None)?;
/// let client = GitHubClient::new(octocrab);
/// # Ok(())
/// # }
/// ```
#[instrument(skip(token))]
pub fn create_token_client(
    token: Option<&SecretString>,
    base_uri: Option<&str>,
) -> Result<Octocrab, Error> {
    let mut builder = Octocrab::builder();

    if let Some(uri) = base_uri {
        debug!(base_uri = uri, "Using custom GitHub API base URL");
        builder = builder
            .base_uri(uri)
            .map_err(|e| Error::AuthError(format!("Invalid GitHub API base URL '{}': {}", uri, e)))?;
    }

    match token {
        Some(token) => {
            builder = builder.personal_token(token.expose_secret().to_string());
        }
        None => {
            warn!("No access token provided, GitHub requests will be unauthenticated");
        }
    }

    builder
        .build()
        .map_err(|e| Error::AuthError(format!("Failed to build GitHub client: {}", e)))
}

/// Logs an octocrab failure and classifies it into an [`Error`].
fn convert_octocrab_error(message: &str, e: octocrab::Error) -> Error {
    log_octocrab_error(message, &e);

    match e {
        octocrab::Error::GitHub { source, .. } => match source.status_code.as_u16() {
            401 => Error::AuthError(source.message),
            403 | 429 if source.message.to_ascii_lowercase().contains("rate limit") => {
                Error::RateLimitExceeded
            }
            404 => Error::NotFound,
            422 => Error::Validation(describe_validation_failure(&source)),
            status => Error::ApiError {
                status,
                message: source.message,
            },
        },
        other => Error::Transport(other.to_string()),
    }
}

/// GitHub reports 422 failures as a generic message plus a list of error
/// codes such as `already_exists` or `invalid`.
fn describe_validation_failure(source: &octocrab::GitHubError) -> String {
    let codes: Vec<&str> = source
        .errors
        .iter()
        .flatten()
        .filter_map(|e| e.get("code").and_then(|c| c.as_str()))
        .collect();

    if codes.is_empty() {
        source.message.clone()
    } else {
        format!("{} ({})", source.message, codes.join(", "))
    }
}

fn log_octocrab_error(message: &str, e: &octocrab::Error) {
    match e {
        octocrab::Error::GitHub { source, .. } => warn!(
            error_message = source.message,
            status = source.status_code.as_u16(),
            "{}. Received an error from GitHub",
            message
        ),
        octocrab::Error::UriParse { source, .. } => warn!(
            error_message = source.to_string(),
            "{}. Failed to parse URI.",
            message
        ),
        octocrab::Error::Uri { source, .. } => warn!(
            error_message = source.to_string(),
            "{}. Failed to parse URI.",
            message
        ),
        octocrab::Error::InvalidHeaderValue { source, .. } => warn!(
            error_message = source.to_string(),
            "{}. One of the header values was invalid.",
            message
        ),
        octocrab::Error::InvalidUtf8 { source, .. } => warn!(
            error_message = source.to_string(),
            "{}. The message wasn't valid UTF-8.",
            message,
        ),
        _ => warn!(error_message = e.to_string(), "{}", message),
    };
}
