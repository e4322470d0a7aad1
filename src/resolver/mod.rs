//! Project version resolution
//!
//! A Python project's version is asked from its build backend, trying in
//! order:
//!
//! 1. `hatch version`
//! 2. `poetry version` (prints `<name> <version>`)
//! 3. an editable `pip install` followed by `pip list --format json`
//!
//! The first strategy to produce a non-empty version wins. Hatch and Poetry
//! are optional: if they are missing or fail, the next strategy is tried.
//! Pip is the last resort, so its failure is the failure of the whole
//! resolution and is reported with the command that failed and its output.
//!
//! Every command runs with the project directory as the working directory
//! and with the sanitized environment.

pub mod hatch;
pub mod pip;
pub mod poetry;

use std::path::Path;

use tracing::{debug, info};

use crate::config::ToolsConfig;
use crate::environment::SanitizedEnv;
use crate::error::Result;
use crate::process::{CommandLine, CommandOutput, CommandRunner};
use crate::workdir;

/// Everything a strategy needs to query a project
#[derive(Clone, Copy)]
pub struct ResolveContext<'a> {
    /// Absolute project directory
    pub directory: &'a Path,
    pub runner: &'a dyn CommandRunner,
    pub env: &'a SanitizedEnv,
    pub tools: &'a ToolsConfig,
}

impl<'a> ResolveContext<'a> {
    /// Run `command` inside the project directory.
    pub(crate) fn run(&self, command: &CommandLine) -> Result<CommandOutput> {
        workdir::within(self.directory, || self.runner.run(command, self.env))
    }
}

/// A strategy that may or may not find a version
pub type OptionalStrategy = for<'a, 'b> fn(&'a ResolveContext<'b>) -> Option<String>;

/// Optional strategies in priority order
pub const OPTIONAL_STRATEGIES: &[(&str, OptionalStrategy)] = &[
    ("hatch", hatch::hatch_version),
    ("poetry", poetry::poetry_version),
];

/// Resolve the version of the project in `ctx.directory`.
///
/// # Returns
/// * `Ok(String)` - Non-empty version from the first strategy that found one
/// * `Err(GittableError::VersionNotFound)` - If every strategy failed
pub fn resolve_version(ctx: &ResolveContext<'_>) -> Result<String> {
    let found = OPTIONAL_STRATEGIES.iter().find_map(|(name, strategy)| {
        let version = strategy(ctx)?;
        debug!(strategy = *name, version = %version, "version resolved");
        Some(version)
    });

    match found {
        Some(version) => Ok(version),
        None => {
            info!("hatch and poetry gave no version, falling back to pip");
            pip::pip_version(ctx)
        }
    }
}

/// `Some(value)` unless `value` is empty
pub(crate) fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
