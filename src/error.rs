use std::error::Error as StdError;
use std::path::PathBuf;

use thiserror::Error;

use crate::process::CommandLine;

/// Unified error type for gittable operations
#[derive(Error, Debug)]
pub enum GittableError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Command failed ({status}): {command}{}", render_output(.stdout, .stderr))]
    Command {
        command: CommandLine,
        status: String,
        stdout: String,
        stderr: String,
    },

    #[error("Git operation failed: {0}")]
    Git(String),

    #[error("Invalid package metadata: {0}")]
    Metadata(String),

    #[error(
        "Unable to determine the project version:\n$ cd {} && {}\n{}{}",
        quote_path(.directory),
        .command.args_line(),
        .output,
        .trace
    )]
    VersionNotFound {
        directory: PathBuf,
        command: CommandLine,
        output: String,
        trace: String,
    },
}

/// Convenience type alias for Results in gittable
pub type Result<T> = std::result::Result<T, GittableError>;

impl GittableError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GittableError::Config(msg.into())
    }

    /// Create a git error with context
    pub fn git(msg: impl Into<String>) -> Self {
        GittableError::Git(msg.into())
    }

    /// Create a metadata error with context
    pub fn metadata(msg: impl Into<String>) -> Self {
        GittableError::Metadata(msg.into())
    }

    /// Output captured from the failing subprocess, preferring stdout.
    ///
    /// Returns an empty string for errors that did not come from a subprocess.
    pub fn captured_output(&self) -> &str {
        match self {
            GittableError::Command { stdout, stderr, .. } => {
                if stdout.trim().is_empty() {
                    stderr.trim()
                } else {
                    stdout.trim()
                }
            }
            _ => "",
        }
    }
}

impl From<git2::Error> for GittableError {
    fn from(err: git2::Error) -> Self {
        GittableError::Git(err.message().to_string())
    }
}

fn quote_path(path: &std::path::Path) -> String {
    crate::process::quote(&path.to_string_lossy())
}

fn render_output(stdout: &str, stderr: &str) -> String {
    let mut rendered = String::new();
    if !stdout.trim().is_empty() {
        rendered.push_str(&format!("\nStdout: {}", stdout.trim()));
    }
    if !stderr.trim().is_empty() {
        rendered.push_str(&format!("\nStderr: {}", stderr.trim()));
    }
    rendered
}

/// Render an error and its chain of sources, one per line.
///
/// Mirrors the `Caused by:` layout anyhow prints for `{:?}`. A cause whose
/// text already ends the message above it (`I/O error: {0}`) is not repeated.
pub fn format_error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut previous = err.to_string();
    let mut causes = Vec::new();
    let mut source = err.source();
    while let Some(cause) = source {
        let message = cause.to_string();
        if !previous.ends_with(&message) {
            causes.push(message.clone());
        }
        previous = message;
        source = cause.source();
    }

    let mut text = format!("Error: {}\n", err);
    if !causes.is_empty() {
        text.push_str("\nCaused by:\n");
    }
    for (depth, cause) in causes.iter().enumerate() {
        text.push_str(&format!("    {}: {}\n", depth, cause));
    }
    text
}
