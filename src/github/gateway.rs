//! Gateway for the pull request operations the check performs.
//!
//! The trait-based design enables mocking in tests while the Octocrab
//! implementation handles real HTTP requests.

use async_trait::async_trait;
use http::{StatusCode, Uri};
use octocrab::{Octocrab, Page};

use super::error::CheckError;
use super::locator::{AccessToken, PullRequestLocator};
use super::models::{
    ApiCommentAck, ApiCommitEntry, ApiPullRequest, PullRequestCommit, PullRequestMetadata,
};

/// Gateway covering the three API calls the format check needs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PullRequestGateway: Send + Sync {
    /// Fetch the pull request commits in the order the API returns them.
    async fn list_commits(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<PullRequestCommit>, CheckError>;

    /// Fetch the pull request metadata.
    async fn pull_request(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<PullRequestMetadata, CheckError>;

    /// Post an issue comment on the pull request.
    async fn create_issue_comment(
        &self,
        locator: &PullRequestLocator,
        body: &str,
    ) -> Result<(), CheckError>;
}

/// Octocrab-backed gateway.
pub struct OctocrabGateway {
    client: Octocrab,
}

impl OctocrabGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token and pull request locator.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::InvalidApiBase` when the base URI cannot be parsed
    /// or `CheckError::Api` when Octocrab fails to construct a client.
    pub fn for_token(
        token: &AccessToken,
        locator: &PullRequestLocator,
    ) -> Result<Self, CheckError> {
        let base_uri: Uri = locator
            .api_base()
            .as_str()
            .parse::<Uri>()
            .map_err(|error| CheckError::InvalidApiBase(error.to_string()))?;

        let client = Octocrab::builder()
            .personal_token(token.as_ref())
            .base_uri(base_uri)
            .map_err(|error| CheckError::Api {
                message: format!("build client failed: {error}"),
            })?
            .build()
            .map_err(|error| map_octocrab_error("build client", &error))?;

        Ok(Self::new(client))
    }
}

#[async_trait]
impl PullRequestGateway for OctocrabGateway {
    async fn list_commits(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<PullRequestCommit>, CheckError> {
        let page = self
            .client
            .get::<Page<ApiCommitEntry>, _, _>(locator.commits_path(), None::<&()>)
            .await
            .map_err(|error| map_octocrab_error("list commits", &error))?;

        self.client
            .all_pages(page)
            .await
            .map(|entries| entries.into_iter().map(ApiCommitEntry::into).collect())
            .map_err(|error| map_octocrab_error("list commits", &error))
    }

    async fn pull_request(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<PullRequestMetadata, CheckError> {
        self.client
            .get::<ApiPullRequest, _, _>(locator.pull_request_path(), None::<&()>)
            .await
            .map(ApiPullRequest::into)
            .map_err(|error| map_octocrab_error("pull request", &error))
    }

    async fn create_issue_comment(
        &self,
        locator: &PullRequestLocator,
        body: &str,
    ) -> Result<(), CheckError> {
        let payload = serde_json::json!({ "body": body });

        self.client
            .post::<serde_json::Value, ApiCommentAck>(locator.comments_path(), Some(&payload))
            .await
            .map(|_ack| ())
            .map_err(|error| map_octocrab_error("create comment", &error))
    }
}

// --- Error mapping helpers ---

/// Checks if a GitHub error status indicates an authentication failure.
const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> CheckError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return if is_auth_failure(source.status_code) {
            CheckError::Authentication {
                message: format!(
                    "{operation} failed: GitHub returned {status} {message}",
                    status = source.status_code,
                    message = source.message
                ),
            }
        } else {
            CheckError::Api {
                message: format!(
                    "{operation} failed with status {status}: {message}",
                    status = source.status_code,
                    message = source.message
                ),
            }
        };
    }

    if is_network_error(error) {
        return CheckError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    CheckError::Api {
        message: format!("{operation} failed: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use url::Url;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::{CheckError, OctocrabGateway, PullRequestGateway};
    use crate::github::locator::{AccessToken, PullRequestLocator};

    fn gateway_for(server: &MockServer, number: u64) -> (OctocrabGateway, PullRequestLocator) {
        let api_base = Url::parse(&server.uri()).expect("mock server URI should parse");
        let locator = PullRequestLocator::from_parts("owner", "repo", number, api_base)
            .expect("locator should build");
        let token = AccessToken::new("valid-token").expect("token should be valid");
        let gateway = OctocrabGateway::for_token(&token, &locator).expect("should create gateway");
        (gateway, locator)
    }

    #[tokio::test]
    async fn list_commits_extracts_nested_messages_in_order() {
        let server = MockServer::start().await;
        let (gateway, locator) = gateway_for(&server, 4);

        let response = ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "sha": "a1", "commit": { "message": "Bug 1 - first" } },
            { "sha": "b2", "commit": { "message": "Merge branch 'main'" } },
            { "sha": "c3", "commit": { "message": "Bug 2 - second" } }
        ]));

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/pulls/4/commits"))
            .respond_with(response)
            .mount(&server)
            .await;

        let commits = gateway
            .list_commits(&locator)
            .await
            .expect("request should succeed");

        let messages: Vec<&str> = commits.iter().map(|c| c.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["Bug 1 - first", "Merge branch 'main'", "Bug 2 - second"],
            "commit order must match the API response"
        );
    }

    #[tokio::test]
    async fn pull_request_returns_title() {
        let server = MockServer::start().await;
        let (gateway, locator) = gateway_for(&server, 7);

        let response = ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "number": 7,
            "title": "Bug 42 - Add feature",
            "state": "open"
        }));

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/pulls/7"))
            .respond_with(response)
            .mount(&server)
            .await;

        let metadata = gateway
            .pull_request(&locator)
            .await
            .expect("request should succeed");

        assert_eq!(metadata.number, 7, "number mismatch");
        assert_eq!(
            metadata.title.as_deref(),
            Some("Bug 42 - Add feature"),
            "title mismatch"
        );
    }

    #[tokio::test]
    async fn create_issue_comment_posts_the_body() {
        let server = MockServer::start().await;
        let (gateway, locator) = gateway_for(&server, 4);

        let body = "🚧 Commit message is using the wrong format: _Fix typo_";
        Mock::given(method("POST"))
            .and(path("/repos/owner/repo/issues/4/comments"))
            .and(body_json(serde_json::json!({ "body": body })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 99,
                "body": body
            })))
            .expect(1)
            .mount(&server)
            .await;

        gateway
            .create_issue_comment(&locator, body)
            .await
            .expect("comment should post");
    }

    #[tokio::test]
    async fn rejected_token_maps_to_authentication_error() {
        let server = MockServer::start().await;
        let (gateway, locator) = gateway_for(&server, 4);

        let response = ResponseTemplate::new(401)
            .set_body_json(serde_json::json!({ "message": "Bad credentials" }));

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/pulls/4/commits"))
            .respond_with(response)
            .mount(&server)
            .await;

        let error = gateway
            .list_commits(&locator)
            .await
            .expect_err("request should fail");

        match error {
            CheckError::Authentication { message } => {
                assert!(
                    message.contains("Bad credentials"),
                    "unexpected message: {message}"
                );
            }
            other => panic!("expected Authentication, got {other:?}"),
        }
    }
}
