//! Trigger event payload parsing.
//!
//! The CI runner writes the webhook payload that triggered the job to a file
//! and exports its path. Only three fields matter to the check: the
//! repository name, the repository owner login, and the optional top-level
//! pull request number. Pushes and other non-PR triggers simply lack the
//! number.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::github::error::CheckError;
use crate::github::locator::PullRequestLocator;

/// The subset of the trigger event payload the check reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkflowEvent {
    /// Pull request number; absent for non-PR triggers.
    number: Option<u64>,
    /// Repository the event fired in.
    repository: Option<EventRepository>,
}

#[derive(Debug, Clone, Deserialize)]
struct EventRepository {
    name: String,
    owner: EventOwner,
}

#[derive(Debug, Clone, Deserialize)]
struct EventOwner {
    login: String,
}

impl WorkflowEvent {
    /// Reads and parses the payload file the CI runner points at.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Payload`] when the file cannot be read or does
    /// not contain valid JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CheckError> {
        let raw = fs::read_to_string(path.as_ref()).map_err(|error| CheckError::Payload {
            message: format!(
                "failed to read event payload {path}: {error}",
                path = path.as_ref().display()
            ),
        })?;
        Self::from_json(&raw)
    }

    /// Parses a payload from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Payload`] when the JSON is malformed.
    pub fn from_json(raw: &str) -> Result<Self, CheckError> {
        serde_json::from_str(raw).map_err(|error| CheckError::Payload {
            message: format!("failed to parse event payload: {error}"),
        })
    }

    /// The pull request number, when the trigger was PR-scoped.
    #[must_use]
    pub const fn pull_request_number(&self) -> Option<u64> {
        self.number
    }

    /// Builds the pull request locator from the payload fields.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::InvalidPullRequestNumber`] when the payload
    /// carries no number and [`CheckError::MissingRepositoryField`] when the
    /// repository identity is incomplete.
    pub fn locator(&self, api_base: &Url) -> Result<PullRequestLocator, CheckError> {
        let number = self.number.ok_or(CheckError::InvalidPullRequestNumber)?;
        let repository = self
            .repository
            .as_ref()
            .ok_or(CheckError::MissingRepositoryField { field: "name" })?;

        PullRequestLocator::from_parts(
            &repository.owner.login,
            &repository.name,
            number,
            api_base.clone(),
        )
    }
}
