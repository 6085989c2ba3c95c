//! Error types for GitHub client operations.
//!
//! This module defines the error types that can occur when interacting with the GitHub API
//! through the github_client crate. Errors returned by octocrab are classified by HTTP
//! status so that callers can report them without inspecting octocrab internals.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// ## Examples
///
/// ```rust,ignore
/// use github_client::{Error, LabelClient};
///
/// match client.create_label("octo", "widgets", "bug", "d73a4a", "").await {
///     Ok(label) => println!("Label created: {}", label.name),
///     Err(Error::AuthError(msg)) => eprintln!("Authentication failed: {}", msg),
///     Err(Error::RateLimitExceeded) => eprintln!("Rate limit exceeded, retry later"),
///     Err(err) => eprintln!("Other error: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// GitHub rejected the request with a status that has no dedicated variant.
    #[error("GitHub API request failed with status {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Authentication or GitHub client initialization failure.
    ///
    /// This error occurs when:
    /// - The access token is missing, invalid or expired
    /// - The client could not be built (for instance an unparsable base URL)
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// The requested resource was not found.
    ///
    /// GitHub also answers 404 for private repositories the token cannot see.
    #[error("Resource not found")]
    NotFound,

    /// GitHub API rate limit has been exceeded.
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// The request never produced a GitHub response (connection, URI or
    /// response decoding failures).
    #[error("Failed to communicate with GitHub: {0}")]
    Transport(String),

    /// GitHub refused the payload (HTTP 422), e.g. an invalid color or a label
    /// that already exists.
    #[error("Validation failed: {0}")]
    Validation(String),
}
