//! A complete synchronisation run: build the client, load the label file,
//! reconcile.

use std::{io::Write, sync::Arc};

use github_client::{create_token_client, GitHubClient};
use make_labels_core::{load_desired_labels, LabelManager, SyncReport};
use tracing::{info, instrument, warn};

use crate::{config::SyncConfig, errors::Error, reporter::TerminalReporter};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// What happened during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Outcomes of the label operations
    pub report: SyncReport,

    /// Set when the label file could not be read or parsed
    pub label_file_error: Option<String>,
}

impl RunOutcome {
    /// Process exit status for this run.
    ///
    /// Without `strict` the status is always 0, whatever failed. With it,
    /// any failure (label file, listing or a single label) yields 1.
    pub fn exit_code(&self, strict: bool) -> i32 {
        if strict && (self.label_file_error.is_some() || !self.report.is_success()) {
            1
        } else {
            0
        }
    }
}

/// Runs one synchronisation with the given configuration.
///
/// A label file that cannot be loaded is reported and treated as an empty
/// declaration, so no label request is sent.
///
/// # Errors
///
/// Returns `Error::Config` if the GitHub client cannot be built.
#[instrument(skip(config, reporter), fields(repository = %config.repository))]
pub async fn run<W: Write>(
    config: &SyncConfig,
    reporter: &mut TerminalReporter<W>,
) -> Result<RunOutcome, Error> {
    let octocrab = create_token_client(config.token.as_ref(), config.api_base_url.as_deref())
        .map_err(|e| Error::Config(e.to_string()))?;
    let manager = LabelManager::new(Arc::new(GitHubClient::new(octocrab)));

    let (desired, label_file_error) = match load_desired_labels(&config.labels_path) {
        Ok(labels) => (labels, None),
        Err(e) => {
            warn!(path = ?config.labels_path, error = %e, "Continuing without declared labels");
            reporter.label_file_failed(&e);
            (Vec::new(), Some(e.to_string()))
        }
    };

    let report = manager
        .sync_labels(&config.repository, &desired, reporter)
        .await;

    info!(
        created = report.created(),
        updated = report.updated(),
        failed = report.failed(),
        "Run complete"
    );

    Ok(RunOutcome {
        report,
        label_file_error,
    })
}
