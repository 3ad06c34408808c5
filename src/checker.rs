//! The format check itself.
//!
//! Validation failures are outcome values rather than errors: the checker
//! returns [`CheckOutcome`] and reserves [`CheckError`] for infrastructure
//! failures such as API or payload problems. The binary adapter maps the
//! outcome onto the CI runner's pass/fail convention.

use url::Url;

use crate::event::WorkflowEvent;
use crate::github::error::CheckError;
use crate::github::gateway::PullRequestGateway;
use crate::github::locator::PullRequestLocator;
use crate::rules;

/// Result of one check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The trigger was not PR-scoped; nothing was checked.
    Skipped,
    /// Every commit message and the title satisfied the rules.
    Passed,
    /// The first violation found; a comment was posted before returning.
    Failed(Violation),
}

/// The first formatting violation found during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A non-exempt commit message lacked a bug reference.
    CommitMessage {
        /// The offending commit message, verbatim.
        message: String,
        /// The comment body that was posted on the pull request.
        comment: String,
    },
    /// The pull request title lacked a bug reference.
    Title {
        /// The offending title, verbatim.
        title: String,
        /// The comment body that was posted on the pull request.
        comment: String,
    },
}

impl Violation {
    /// The comment body posted for this violation.
    #[must_use]
    pub fn comment(&self) -> &str {
        match self {
            Self::CommitMessage { comment, .. } | Self::Title { comment, .. } => comment,
        }
    }
}

/// Runs the formatting rules against a pull request through a gateway.
pub struct FormatChecker<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> FormatChecker<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    /// Create a new checker using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Runs the check for the pull request identified by the trigger event.
    ///
    /// Commits are validated one at a time in API order and the run stops at
    /// the first violation, so at most one comment is posted and the title is
    /// only fetched once every commit has passed.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures and payload problems; formatting
    /// violations are reported through [`CheckOutcome::Failed`] instead.
    pub async fn run(
        &self,
        event: &WorkflowEvent,
        api_base: &Url,
    ) -> Result<CheckOutcome, CheckError> {
        let Some(number) = event.pull_request_number() else {
            tracing::warn!("no pull request number in payload; skipping check");
            return Ok(CheckOutcome::Skipped);
        };
        tracing::debug!(number, "checking pull request");

        let locator = event.locator(api_base)?;
        self.check(&locator).await
    }

    /// Validates the commits and title of an already-resolved pull request.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures.
    pub async fn check(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<CheckOutcome, CheckError> {
        let commits = self.client.list_commits(locator).await?;

        for commit in commits {
            if rules::commit_message_acceptable(&commit.message) {
                continue;
            }

            tracing::debug!(message = %commit.message, "commit message violation");
            let comment = rules::commit_violation_comment(&commit.message);
            self.client.create_issue_comment(locator, &comment).await?;
            return Ok(CheckOutcome::Failed(Violation::CommitMessage {
                message: commit.message,
                comment,
            }));
        }

        let metadata = self.client.pull_request(locator).await?;
        let title = metadata.title.unwrap_or_default();

        if !rules::title_acceptable(&title) {
            tracing::debug!(%title, "pull request title violation");
            let comment = rules::title_violation_comment(&title);
            self.client.create_issue_comment(locator, &comment).await?;
            return Ok(CheckOutcome::Failed(Violation::Title { title, comment }));
        }

        Ok(CheckOutcome::Passed)
    }
}
