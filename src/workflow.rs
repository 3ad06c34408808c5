//! Workflow command output for the CI runner.
//!
//! The runner turns specially formatted stdout lines into annotations:
//! `::warning::…`, `::notice::…`, and `::error::…`. Message data must have
//! `%`, carriage returns, and newlines percent-encoded so multi-line comment
//! bodies survive as a single annotation.

use std::io::{self, Write};

/// Escapes annotation message data for the command line protocol.
fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn emit(kind: &str, message: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "::{kind}::{}", escape_data(message))
}

/// Emits a warning annotation.
///
/// # Errors
///
/// Returns the underlying I/O error when stdout cannot be written.
pub fn warning(message: &str) -> io::Result<()> {
    emit("warning", message)
}

/// Emits a notice annotation.
///
/// # Errors
///
/// Returns the underlying I/O error when stdout cannot be written.
pub fn notice(message: &str) -> io::Result<()> {
    emit("notice", message)
}

/// Emits an error annotation.
///
/// # Errors
///
/// Returns the underlying I/O error when stdout cannot be written.
pub fn error(message: &str) -> io::Result<()> {
    emit("error", message)
}
