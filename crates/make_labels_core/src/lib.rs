//! # make-labels core
//!
//! This crate holds the label synchronisation logic behind the `make-labels`
//! command: it loads the labels declared in a JSON file, compares them with
//! the labels that exist on a GitHub repository and creates or updates labels
//! until the repository matches the declaration.
//!
//! Labels that exist on GitHub but are not declared are left alone.
//!
//! ## Examples
//!
//! ```no_run
//! use std::{path::Path, sync::Arc};
//! use github_client::{create_token_client, GitHubClient};
//! use make_labels_core::{load_desired_labels, LabelManager, NoopReporter, RepositoryId};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = RepositoryId::parse("octo-org/widgets")?;
//! let desired = load_desired_labels(Path::new("example.json"))?;
//!
//! let client = GitHubClient::new(create_token_client(None, None)?);
//! let manager = LabelManager::new(Arc::new(client));
//!
//! let report = manager.sync_labels(&repo, &desired, &mut NoopReporter).await;
//! if !report.is_success() {
//!     eprintln!("Failed labels: {:?}", report.failed_labels());
//! }
//! # Ok(())
//! # }
//! ```

pub mod desired_labels;
pub mod errors;
pub mod label_manager;
pub mod repository;

pub use desired_labels::{load_desired_labels, parse_desired_labels, DesiredLabel};
pub use errors::{Error, MakeLabelsResult};
pub use label_manager::{
    plan_label_operations, LabelManager, LabelOperation, LabelOutcome, NoopReporter,
    ProgressReporter, SyncReport,
};
pub use repository::RepositoryId;
