//! Application configuration loaded from CLI, environment, and files.
//!
//! Values merge with ortho-config's layered precedence (defaults, then
//! configuration file, then environment variables, then command-line
//! arguments). The CI runner's own environment variables act as fallbacks so
//! that the check works with zero configuration inside a workflow job:
//! `GITHUB_TOKEN` for the token, `GITHUB_EVENT_PATH` for the payload, and
//! `GITHUB_API_URL` for the API base.

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::github::error::CheckError;

/// Default API base when neither configuration nor the runner provides one.
const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Configuration for the format check.
///
/// # Environment Variables
///
/// - `BUGREF_TOKEN`, `GITHUB_TOKEN` (runner fallback), or `--token`
/// - `BUGREF_EVENT_PATH`, `GITHUB_EVENT_PATH` (runner fallback), or
///   `--event-path`
/// - `BUGREF_API_BASE`, `GITHUB_API_URL` (runner fallback), or `--api-base`
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "BUGREF",
    discovery(
        dotfile_name = ".bugref.toml",
        config_file_name = "bugref.toml",
        app_name = "bugref"
    )
)]
pub struct BugrefConfig {
    /// Access token for the forge API. Never logged.
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Path to the trigger event payload file.
    #[ortho_config(cli_short = 'e')]
    pub event_path: Option<String>,

    /// Forge API base URL, for enterprise hosts and tests.
    pub api_base: Option<String>,
}

impl BugrefConfig {
    /// Resolves the token from configuration or the runner's `GITHUB_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::MissingToken`] when no source provides a value.
    pub fn resolve_token(&self) -> Result<String, CheckError> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(CheckError::MissingToken)
    }

    /// Resolves the event payload path from configuration or the runner's
    /// `GITHUB_EVENT_PATH`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::MissingEventPath`] when no source provides a
    /// value.
    pub fn resolve_event_path(&self) -> Result<String, CheckError> {
        self.event_path
            .clone()
            .or_else(|| env::var("GITHUB_EVENT_PATH").ok())
            .ok_or(CheckError::MissingEventPath)
    }

    /// Resolves the API base URL from configuration, the runner's
    /// `GITHUB_API_URL`, or the public default.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::InvalidApiBase`] when the resolved value is not
    /// a valid URL.
    pub fn resolve_api_base(&self) -> Result<Url, CheckError> {
        let raw = self
            .api_base
            .clone()
            .or_else(|| env::var("GITHUB_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_owned());

        Url::parse(&raw).map_err(|error| CheckError::InvalidApiBase(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::BugrefConfig;
    use crate::github::error::CheckError;

    #[rstest]
    fn configured_token_wins_over_environment() {
        let _guard = env_lock::lock_env([("GITHUB_TOKEN", Some("env-token"))]);
        let config = BugrefConfig {
            token: Some("config-token".to_owned()),
            ..Default::default()
        };

        assert_eq!(
            config.resolve_token().ok(),
            Some("config-token".to_owned()),
            "configured token should win"
        );
    }

    #[rstest]
    fn token_falls_back_to_github_token() {
        let _guard = env_lock::lock_env([("GITHUB_TOKEN", Some("env-token"))]);
        let config = BugrefConfig::default();

        assert_eq!(
            config.resolve_token().ok(),
            Some("env-token".to_owned()),
            "should fall back to GITHUB_TOKEN"
        );
    }

    #[rstest]
    fn missing_token_is_an_error() {
        let _guard = env_lock::lock_env([("GITHUB_TOKEN", None::<&str>)]);
        let config = BugrefConfig::default();

        assert!(
            matches!(config.resolve_token(), Err(CheckError::MissingToken)),
            "expected MissingToken"
        );
    }

    #[rstest]
    fn event_path_falls_back_to_runner_variable() {
        let _guard = env_lock::lock_env([("GITHUB_EVENT_PATH", Some("/tmp/event.json"))]);
        let config = BugrefConfig::default();

        assert_eq!(
            config.resolve_event_path().ok(),
            Some("/tmp/event.json".to_owned()),
            "should fall back to GITHUB_EVENT_PATH"
        );
    }

    #[rstest]
    fn missing_event_path_is_an_error() {
        let _guard = env_lock::lock_env([("GITHUB_EVENT_PATH", None::<&str>)]);
        let config = BugrefConfig::default();

        assert!(
            matches!(
                config.resolve_event_path(),
                Err(CheckError::MissingEventPath)
            ),
            "expected MissingEventPath"
        );
    }

    #[rstest]
    fn api_base_defaults_to_public_github() {
        let _guard = env_lock::lock_env([("GITHUB_API_URL", None::<&str>)]);
        let config = BugrefConfig::default();

        let api_base = config.resolve_api_base().expect("default should parse");
        assert_eq!(
            api_base.as_str(),
            "https://api.github.com/",
            "unexpected default API base"
        );
    }

    #[rstest]
    fn invalid_api_base_is_rejected() {
        let config = BugrefConfig {
            api_base: Some("not a url".to_owned()),
            ..Default::default()
        };

        assert!(
            matches!(config.resolve_api_base(), Err(CheckError::InvalidApiBase(_))),
            "expected InvalidApiBase"
        );
    }
}
