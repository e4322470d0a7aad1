//! External command execution
//!
//! Every tool this crate drives (hatch, poetry, pip, git) is reached through
//! the [CommandRunner] trait, so the version resolver and the tagger can be
//! exercised against scripted results instead of real executables.
//!
//! - [system::SystemRunner]: spawns real processes, resolves programs on `PATH`
//! - [mock::MockRunner]: scripted responses that records every invocation
//!
//! Runners execute in the *current* working directory of the process.
//! Callers that need another directory enter it first with
//! [crate::workdir::WorkingDirectory].

pub mod mock;
pub mod system;

pub use mock::{MockResponse, MockRunner};
pub use system::SystemRunner;

use std::fmt;
use std::path::PathBuf;

use crate::environment::SanitizedEnv;
use crate::error::Result;

/// A program and its arguments, as handed to a [CommandRunner]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandLine {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Shell-quoted rendering of the program and its arguments
    pub fn args_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(quote)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.args_line())
    }
}

/// Captured output of a command that exited successfully
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Abstraction over process spawning
pub trait CommandRunner {
    /// Locate `program` on the search path.
    ///
    /// # Returns
    /// * `Some(path)` - Full path of the executable
    /// * `None` - If the program cannot be found
    fn resolve(&self, program: &str) -> Option<PathBuf>;

    /// Run a command to completion with exactly the variables in `env`.
    ///
    /// # Returns
    /// * `Ok(CommandOutput)` - The command exited with status 0
    /// * `Err(GittableError::Command)` - The command exited unsuccessfully
    /// * `Err(GittableError::Io)` - The command could not be spawned
    fn run(&self, command: &CommandLine, env: &SanitizedEnv) -> Result<CommandOutput>;
}

/// Quote a word for a POSIX shell.
///
/// Words made only of characters that are safe unquoted are returned as-is;
/// everything else is wrapped in single quotes.
pub fn quote(word: &str) -> String {
    if word.is_empty() {
        return "''".to_string();
    }

    let safe = word
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "@%+=:,./_-".contains(c));
    if safe {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r#"'"'"'"#))
    }
}
