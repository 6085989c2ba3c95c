//! Repository identification.
//!
//! The target repository is given once on the command line as `owner/name`
//! and never changes for the rest of the run.

use std::{fmt, str::FromStr};

use crate::errors::Error;

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;

/// Owner and name of a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryId {
    owner: String,
    name: String,
}

impl RepositoryId {
    /// Creates a repository identifier from its two parts.
    ///
    /// # Errors
    /// Returns `Error::InvalidRepository` if either part is empty or contains a `/`.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Result<Self, Error> {
        let owner = owner.into();
        let name = name.into();

        for part in [&owner, &name] {
            if part.is_empty() || part.contains('/') {
                return Err(Error::InvalidRepository {
                    input: format!("{}/{}", owner, name),
                    reason: "expected <owner>/<repository>".to_string(),
                });
            }
        }

        Ok(Self { owner, name })
    }

    /// Parses an `owner/name` string.
    ///
    /// # Errors
    /// Returns `Error::InvalidRepository` unless the input has exactly one `/`
    /// with a non-empty part on each side.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidRepository {
            input: input.to_string(),
            reason: "expected <owner>/<repository>".to_string(),
        };

        let (owner, name) = input.split_once('/').ok_or_else(invalid)?;
        Self::new(owner, name).map_err(|_| invalid())
    }

    /// The user or organization owning the repository
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The repository name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for RepositoryId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
