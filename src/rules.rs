//! Formatting rules for commit messages and pull request titles.
//!
//! The rule is a single fixed pattern: a whole word `Bug` followed by one
//! space and a run of digits, anywhere in the text. Commit messages that
//! start with `Revert` or `Merge` are exempt; titles never are.

use std::sync::LazyLock;

use regex::Regex;

/// Prefixes that exempt a commit message from the bug reference rule.
const EXEMPT_PREFIXES: [&str; 2] = ["Revert", "Merge"];

static BUG_REFERENCE: LazyLock<Regex> = LazyLock::new(compile_bug_reference);

#[expect(clippy::expect_used, reason = "the pattern is a fixed literal")]
fn compile_bug_reference() -> Regex {
    Regex::new(r"\bBug \d+\b").expect("bug reference pattern should compile")
}

/// Returns true when the text contains a `Bug <number>` reference.
#[must_use]
pub fn has_bug_reference(text: &str) -> bool {
    BUG_REFERENCE.is_match(text)
}

/// Returns true when the commit message is exempt from the rule.
///
/// The match is a case-sensitive prefix check at position 0, so
/// `Reverting…` counts as exempt while `revert…` does not.
#[must_use]
pub fn is_exempt_commit_message(message: &str) -> bool {
    EXEMPT_PREFIXES
        .iter()
        .any(|prefix| message.starts_with(prefix))
}

/// Returns true when the commit message satisfies the formatting rules.
#[must_use]
pub fn commit_message_acceptable(message: &str) -> bool {
    is_exempt_commit_message(message) || has_bug_reference(message)
}

/// Returns true when the pull request title satisfies the formatting rules.
///
/// Unlike commit messages, titles get no `Revert`/`Merge` exemption.
#[must_use]
pub fn title_acceptable(title: &str) -> bool {
    has_bug_reference(title)
}

/// Builds the comment body posted for a malformed commit message.
///
/// The first line wording is load-bearing: downstream tooling and people
/// recognise the established phrasing.
#[must_use]
pub fn commit_violation_comment(message: &str) -> String {
    format!(
        "🚧 Commit message is using the wrong format: _{message}_\n\n\
         The commit message should look like:\n\n\
         Bug xxxx - Short description of your change\n\n\
         Optionally, a longer description of the change."
    )
}

/// Builds the comment body posted for a malformed pull request title.
#[must_use]
pub fn title_violation_comment(title: &str) -> String {
    format!(
        "🚧 Pull request title is using the wrong format: _{title}_\n\n\
         The pull request title should look like:\n\n\
         Bug xxxx - Short description of your change"
    )
}
