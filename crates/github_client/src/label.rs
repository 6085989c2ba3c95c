//! Label domain types.
//!
//! This module contains types representing GitHub issue and pull request labels
//! and the request bodies used to create or modify them.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;

/// Represents a label defined on a repository.
///
/// Only the fields needed to reconcile labels are kept; everything else the
/// GitHub API returns (ids, urls, the `default` flag) is ignored when
/// deserializing.
///
/// # Fields
///
/// * `name` - The name of the label
/// * `color` - The hex color of the label, without the leading `#`
/// * `description` - The optional description of the label
///
/// # Examples
///
/// ```
/// use github_client::Label;
///
/// let label = Label {
///     name: "bug".to_string(),
///     color: "d73a4a".to_string(),
///     description: None,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// The name of the label
    pub name: String,

    /// The hex color of the label
    #[serde(default)]
    pub color: String,

    /// The description of the label, if one is set
    #[serde(default)]
    pub description: Option<String>,
}

/// Request body for `POST /repos/{owner}/{repo}/labels`.
#[derive(Debug, Clone, Serialize)]
pub struct LabelCreatePayload {
    pub name: String,
    pub color: String,
    pub description: String,
}

/// Request body for `PATCH /repos/{owner}/{repo}/labels/{name}`.
///
/// The label name is part of the route, not the body, so an update never
/// renames the label.
#[derive(Debug, Clone, Serialize)]
pub struct LabelUpdatePayload {
    pub color: String,
    pub description: String,
}
