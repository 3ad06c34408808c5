//! Bugref library crate providing the pull request format check.
//!
//! The check validates that every non-merge, non-revert commit message and
//! the pull request title carry a `Bug <number>` reference, posting an
//! explanatory comment on the pull request and failing the run on the first
//! violation. Octocrab is wrapped behind a narrow gateway trait so the check
//! logic can be exercised without the network.

pub mod checker;
pub mod config;
pub mod event;
pub mod github;
pub mod rules;
pub mod workflow;

pub use checker::{CheckOutcome, FormatChecker, Violation};
pub use config::BugrefConfig;
pub use event::WorkflowEvent;
pub use github::{AccessToken, CheckError, OctocrabGateway, PullRequestGateway, PullRequestLocator};
