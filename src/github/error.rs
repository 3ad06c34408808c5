//! Error types exposed by the GitHub check layer.

use thiserror::Error;

/// Errors surfaced while reading the trigger event or talking to GitHub.
///
/// Validation failures (wrong commit message or title format) are not errors;
/// they are reported through [`crate::checker::CheckOutcome`]. Everything here
/// is an infrastructure or configuration failure that ends the run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckError {
    /// The access token was missing from every configuration source.
    #[error("access token is required")]
    MissingToken,

    /// No event payload path was configured and `GITHUB_EVENT_PATH` is unset.
    #[error("event payload path is required")]
    MissingEventPath,

    /// The trigger event payload could not be read or parsed.
    #[error("event payload is invalid: {message}")]
    Payload {
        /// Detail from the I/O or deserialisation failure.
        message: String,
    },

    /// The event payload lacks a repository field the check needs.
    #[error("event payload is missing the repository {field}")]
    MissingRepositoryField {
        /// Name of the absent field (`owner` or `name`).
        field: &'static str,
    },

    /// The pull request number is not a positive integer.
    #[error("pull request number must be a positive integer")]
    InvalidPullRequestNumber,

    /// The API base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidApiBase(String),

    /// The access token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}
