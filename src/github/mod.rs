//! GitHub API layer for the format check.
//!
//! This module wraps Octocrab behind a narrow gateway trait covering the
//! three calls the check performs: listing pull request commits, fetching
//! the pull request, and posting an issue comment. Errors are mapped into
//! user-friendly variants so that callers can surface precise failures
//! without exposing Octocrab internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;

pub use error::CheckError;
pub use gateway::{OctocrabGateway, PullRequestGateway};
pub use locator::{
    AccessToken, PullRequestLocator, PullRequestNumber, RepositoryName, RepositoryOwner,
};
pub use models::{PullRequestCommit, PullRequestMetadata};

#[cfg(test)]
pub use gateway::MockPullRequestGateway;
