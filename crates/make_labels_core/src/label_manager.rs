//! Label reconciliation for a single repository.
//!
//! This module provides the [`LabelManager`] component, which compares the
//! labels declared in the label file with the labels present on GitHub and
//! issues one create or update call per declared label.

use std::{collections::HashSet, fmt, sync::Arc};

use github_client::{Label, LabelClient};
use tracing::{info, warn};

use crate::{DesiredLabel, Error, MakeLabelsResult, RepositoryId};

#[cfg(test)]
#[path = "label_manager_tests.rs"]
mod tests;

/// The remote mutation chosen for a desired label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelOperation {
    /// No label with the same name exists yet.
    Create,
    /// A label with the same name, ignoring case, already exists.
    Update,
}

impl LabelOperation {
    /// Progressive verb used when reporting the operation.
    pub fn progress_verb(&self) -> &'static str {
        match self {
            Self::Create => "Creating",
            Self::Update => "Updating",
        }
    }
}

impl fmt::Display for LabelOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
        }
    }
}

/// Result of processing one desired label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelOutcome {
    Created(String),
    Updated(String),
    Failed {
        name: String,
        operation: LabelOperation,
        reason: String,
    },
}

impl LabelOutcome {
    /// Name of the desired label this outcome belongs to.
    pub fn name(&self) -> &str {
        match self {
            Self::Created(name) | Self::Updated(name) => name.as_str(),
            Self::Failed { name, .. } => name.as_str(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Receives progress while labels are being reconciled.
///
/// Every method has an empty default so implementations only override what
/// they display.
pub trait ProgressReporter {
    /// Called before the create or update request for `name` is sent.
    fn label_started(&mut self, _operation: LabelOperation, _name: &str) {}

    /// Called as soon as the request for a label has completed.
    fn label_finished(&mut self, _outcome: &LabelOutcome) {}

    /// Called when the existing labels could not be listed.
    fn listing_failed(&mut self, _error: &Error) {}
}

/// A [`ProgressReporter`] that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {}

/// Decides, for each desired label in order, whether it must be created or
/// updated.
///
/// Names are compared case-insensitively against the remote snapshot. The
/// snapshot is never modified, so a name declared twice is classified the same
/// way both times.
pub fn plan_label_operations(remote: &[Label], desired: &[DesiredLabel]) -> Vec<LabelOperation> {
    let existing: HashSet<String> = remote.iter().map(|l| l.name.to_lowercase()).collect();

    desired
        .iter()
        .map(|label| {
            if existing.contains(&label.name.to_lowercase()) {
                LabelOperation::Update
            } else {
                LabelOperation::Create
            }
        })
        .collect()
}

/// Manages label reconciliation for repositories.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use github_client::{create_token_client, GitHubClient};
/// use make_labels_core::{DesiredLabel, LabelManager, NoopReporter, RepositoryId};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GitHubClient::new(create_token_client(None, None)?);
/// let manager = LabelManager::new(Arc::new(client));
///
/// let repo = RepositoryId::parse("octo-org/widgets")?;
/// let desired = vec![DesiredLabel::new("bug", "d73a4a", "Something isn't working")];
///
/// let report = manager.sync_labels(&repo, &desired, &mut NoopReporter).await;
/// println!("Created: {}, Updated: {}", report.created(), report.updated());
/// # Ok(())
/// # }
/// ```
pub struct LabelManager {
    /// GitHub client for API operations
    client: Arc<dyn LabelClient>,
}

impl LabelManager {
    /// Creates a new LabelManager.
    pub fn new(client: Arc<dyn LabelClient>) -> Self {
        Self { client }
    }

    /// Lists all labels currently defined in a repository.
    ///
    /// # Errors
    ///
    /// Returns `Error::GitHub` if the API call fails.
    pub async fn list_labels(&self, repo: &RepositoryId) -> MakeLabelsResult<Vec<Label>> {
        match self.client.list_labels(repo.owner(), repo.name()).await {
            Ok(labels) => Ok(labels),
            Err(e) => {
                warn!(repository = %repo, error = ?e, "Failed to list labels");
                Err(e.into())
            }
        }
    }

    /// Reconciles `desired` against the `remote` snapshot without reporting
    /// progress.
    ///
    /// See [`LabelManager::reconcile_with_reporter`].
    pub async fn reconcile(
        &self,
        remote: &[Label],
        desired: &[DesiredLabel],
        repo: &RepositoryId,
    ) -> Vec<LabelOutcome> {
        self.reconcile_with_reporter(remote, desired, repo, &mut NoopReporter)
            .await
    }

    /// Creates or updates every desired label, in declared order.
    ///
    /// # Behavior
    ///
    /// 1. Labels whose name exists in `remote` (ignoring case) are updated,
    ///    all others are created.
    /// 2. Requests are sent one at a time; each completes before the next
    ///    label is processed.
    /// 3. A failed request is recorded as [`LabelOutcome::Failed`] and the
    ///    remaining labels are still processed.
    ///
    /// The returned outcomes are in the same order as `desired`.
    pub async fn reconcile_with_reporter<R>(
        &self,
        remote: &[Label],
        desired: &[DesiredLabel],
        repo: &RepositoryId,
        reporter: &mut R,
    ) -> Vec<LabelOutcome>
    where
        R: ProgressReporter + ?Sized,
    {
        let operations = plan_label_operations(remote, desired);
        let mut outcomes = Vec::with_capacity(desired.len());

        for (label, operation) in desired.iter().zip(operations) {
            reporter.label_started(operation, &label.name);

            let outcome = self.apply_label(repo, label, operation).await;

            reporter.label_finished(&outcome);
            outcomes.push(outcome);
        }

        outcomes
    }

    /// Fetches the current labels once, then reconciles `desired` against them.
    ///
    /// When `desired` is empty no request is made at all. If the listing call
    /// fails the failure is reported and every desired label is treated as
    /// new.
    pub async fn sync_labels<R>(
        &self,
        repo: &RepositoryId,
        desired: &[DesiredLabel],
        reporter: &mut R,
    ) -> SyncReport
    where
        R: ProgressReporter + ?Sized,
    {
        info!(
            repository = %repo,
            label_count = desired.len(),
            "Applying labels to repository"
        );

        let mut report = SyncReport::new();
        if desired.is_empty() {
            info!("No labels declared, nothing to do");
            return report;
        }

        let remote = match self.list_labels(repo).await {
            Ok(labels) => labels,
            Err(e) => {
                info!("Continuing without existing labels, every label will be created");
                reporter.listing_failed(&e);
                report.listing_error = Some(e.to_string());
                Vec::new()
            }
        };

        report.outcomes = self
            .reconcile_with_reporter(&remote, desired, repo, reporter)
            .await;

        info!(
            created = report.created(),
            updated = report.updated(),
            failed = report.failed(),
            "Label application complete"
        );

        report
    }

    async fn apply_label(
        &self,
        repo: &RepositoryId,
        label: &DesiredLabel,
        operation: LabelOperation,
    ) -> LabelOutcome {
        info!(name = %label.name, operation = %operation, "Applying label");

        let result = match operation {
            LabelOperation::Create => {
                self.client
                    .create_label(
                        repo.owner(),
                        repo.name(),
                        &label.name,
                        &label.color,
                        &label.description,
                    )
                    .await
            }
            LabelOperation::Update => {
                self.client
                    .update_label(
                        repo.owner(),
                        repo.name(),
                        &label.name,
                        &label.color,
                        &label.description,
                    )
                    .await
            }
        };

        match (result, operation) {
            (Ok(_), LabelOperation::Create) => LabelOutcome::Created(label.name.clone()),
            (Ok(_), LabelOperation::Update) => LabelOutcome::Updated(label.name.clone()),
            (Err(e), operation) => {
                warn!(
                    name = %label.name,
                    operation = %operation,
                    error = ?e,
                    "Failed to apply label"
                );
                LabelOutcome::Failed {
                    name: label.name.clone(),
                    operation,
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// Result of synchronising labels with a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// One outcome per desired label, in declared order
    pub outcomes: Vec<LabelOutcome>,

    /// Set when the existing labels could not be listed
    pub listing_error: Option<String>,
}

impl SyncReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of labels created
    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, LabelOutcome::Created(_)))
    }

    /// Number of labels updated
    pub fn updated(&self) -> usize {
        self.count(|o| matches!(o, LabelOutcome::Updated(_)))
    }

    /// Number of labels that failed to apply
    pub fn failed(&self) -> usize {
        self.count(LabelOutcome::is_failure)
    }

    /// Names of labels that failed (for error reporting)
    pub fn failed_labels(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.is_failure())
            .map(LabelOutcome::name)
            .collect()
    }

    /// Returns true if the listing and every label operation succeeded.
    pub fn is_success(&self) -> bool {
        self.listing_error.is_none() && self.failed() == 0
    }

    /// Returns true if any labels were successfully applied (created or updated).
    pub fn has_changes(&self) -> bool {
        self.created() > 0 || self.updated() > 0
    }

    fn count(&self, predicate: impl Fn(&LabelOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|&o| predicate(o)).count()
    }
}
