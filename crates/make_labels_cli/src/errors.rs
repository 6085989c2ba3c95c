use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the make-labels CLI application.
///
/// Per-label failures are not errors here; they end up in the
/// [`SyncReport`](make_labels_core::SyncReport) and only influence the exit
/// code when `--strict` is given.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error, such as an unusable GitHub API base URL.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid command-line arguments were provided.
    ///
    /// This error is returned when the repository argument is missing,
    /// repeated, or not of the form `owner/repo`. The usage text is shown
    /// instead of a failure.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// An error reported by the label synchronisation core.
    #[error(transparent)]
    Core(#[from] make_labels_core::Error),
}
