//! Pure formatting functions for UI output.
//!
//! Everything the tool says to the user goes to stderr, leaving stdout for
//! the version alone so the command composes in shell pipelines.

use console::style;

use crate::cli::TagOutcome;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green().for_stderr(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow().for_stderr(), message);
}

/// Report what a tag-version run did to the repository.
pub fn display_tag_outcome(outcome: &TagOutcome) {
    let message = format_tag_outcome(outcome);
    if outcome.created {
        display_success(&message);
    } else {
        display_status(&message);
    }
}

/// Describe a tag-version outcome in one line.
pub fn format_tag_outcome(outcome: &TagOutcome) -> String {
    if outcome.created {
        format!("Created tag {}", outcome.version)
    } else {
        format!("Tag {} already exists, nothing to do", outcome.version)
    }
}

/// Render an error message with its `ERROR:` prefix.
///
/// Multi-line messages (such as a failed command with its output) are kept
/// intact after the prefix.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().for_stderr(), message)
}
