//! Data models for the pull request fields the check consumes.

use serde::Deserialize;

/// A commit belonging to the pull request, reduced to its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestCommit {
    /// Full commit message, subject and body.
    pub message: String,
}

/// Minimal pull request metadata used by the check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestMetadata {
    /// Pull request number.
    pub number: u64,
    /// Title of the pull request.
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiCommitEntry {
    pub(super) commit: ApiCommitDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiCommitDetail {
    pub(super) message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPullRequest {
    pub(super) number: u64,
    pub(super) title: Option<String>,
}

/// Acknowledgement returned by the comment-create endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiCommentAck {
    #[expect(dead_code, reason = "deserialised to confirm the response shape")]
    pub(super) id: u64,
}

impl From<ApiCommitEntry> for PullRequestCommit {
    fn from(value: ApiCommitEntry) -> Self {
        Self {
            message: value.commit.message,
        }
    }
}

impl From<ApiPullRequest> for PullRequestMetadata {
    fn from(value: ApiPullRequest) -> Self {
        Self {
            number: value.number,
            title: value.title,
        }
    }
}
