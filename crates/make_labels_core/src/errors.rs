use std::{io, path::PathBuf};

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Result type for label synchronisation operations.
pub type MakeLabelsResult<T> = Result<T, Error>;

/// Errors produced by the label synchronisation core.
///
/// Per-label API failures are not errors at this level; they are recorded as
/// [`LabelOutcome::Failed`](crate::LabelOutcome::Failed) so that one failing
/// label never stops the others.
#[derive(Error, Debug)]
pub enum Error {
    /// The repository argument is not of the form `owner/name`.
    #[error("Invalid repository '{input}': {reason}")]
    InvalidRepository { input: String, reason: String },

    /// The label file could not be opened or read.
    #[error("Failed to read label file {path:?}: {source}")]
    LoadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The label file is not a JSON array.
    #[error("Failed to parse label file: {0}")]
    ParseLabels(#[from] serde_json::Error),

    /// A GitHub call that the run depends on failed.
    #[error("GitHub request failed: {0}")]
    GitHub(#[from] github_client::Error),
}
