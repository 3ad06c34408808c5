//! Bugref CLI entrypoint: the pull request format check.

use std::process::ExitCode;

use bugref::{
    AccessToken, BugrefConfig, CheckError, CheckOutcome, FormatChecker, OctocrabGateway,
    WorkflowEvent, workflow,
};
use ortho_config::OrthoConfig;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(CheckOutcome::Skipped) => {
            report(workflow::warning("No pull request number in payload."))
        }
        Ok(CheckOutcome::Passed) => report(workflow::notice(
            "PR title and commit messages are using the correct format.",
        )),
        Ok(CheckOutcome::Failed(violation)) => fail(violation.comment()),
        Err(error) => fail(&error.to_string()),
    }
}

async fn run() -> Result<CheckOutcome, CheckError> {
    let config = load_config()?;
    let event = WorkflowEvent::from_path(config.resolve_event_path()?)?;

    // Non-PR triggers skip before the token is even required.
    if event.pull_request_number().is_none() {
        return Ok(CheckOutcome::Skipped);
    }

    let token = AccessToken::new(config.resolve_token()?)?;
    let api_base = config.resolve_api_base()?;
    let locator = event.locator(&api_base)?;

    let gateway = OctocrabGateway::for_token(&token, &locator)?;
    let checker = FormatChecker::new(&gateway);
    checker.check(&locator).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`CheckError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<BugrefConfig, CheckError> {
    BugrefConfig::load().map_err(|error| CheckError::Configuration {
        message: error.to_string(),
    })
}

fn report(write_result: std::io::Result<()>) -> ExitCode {
    if write_result.is_err() {
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn fail(message: &str) -> ExitCode {
    // A failed annotation write must not mask the failed check status.
    let _ignored = workflow::error(message);
    ExitCode::FAILURE
}
