//! Tag-version workflow
//!
//! Resolves the project version and tags the repository with it unless a
//! tag of that name exists. Kept apart from `main.rs` so the workflow can be
//! driven programmatically, with any [CommandRunner].

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{Config, GitBackend};
use crate::environment::SanitizedEnv;
use crate::error::Result;
use crate::git::{Git2Repository, GitCli, TagRepository};
use crate::process::{CommandRunner, SystemRunner};
use crate::resolver::{resolve_version, ResolveContext};
use crate::workdir;

/// Arguments for the tag-version workflow
///
/// Mirrors the CLI Args without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct TagVersionArgs {
    /// Project directory, relative paths resolved against the current directory
    pub directory: PathBuf,

    /// Tag message; the version is used when empty
    pub message: String,
}

impl Default for TagVersionArgs {
    fn default() -> Self {
        TagVersionArgs {
            directory: PathBuf::from("."),
            message: String::new(),
        }
    }
}

/// Result of a successful tag-version workflow
#[derive(Debug, Clone, PartialEq)]
pub struct TagOutcome {
    /// The resolved project version, which is also the tag name
    pub version: String,

    /// Whether this run created the tag
    pub created: bool,
}

/// Main tag-version workflow
///
/// 1. Resolve the project directory and its version
/// 2. Enter the project directory
/// 3. List existing tags
/// 4. Create an annotated tag named after the version if it is missing
///
/// The working directory is restored before returning, on success and on
/// error.
///
/// # Arguments
///
/// * `args` - Project directory and tag message
/// * `config` - Tool names and git backend
/// * `runner` - Executes hatch, poetry, pip and git
/// * `env` - Environment handed to every command
pub fn run_tag_version(
    args: &TagVersionArgs,
    config: &Config,
    runner: &dyn CommandRunner,
    env: &SanitizedEnv,
) -> Result<TagOutcome> {
    let directory = args.directory.canonicalize()?;
    debug!(directory = %directory.display(), "tagging project");

    let ctx = ResolveContext {
        directory: &directory,
        runner,
        env,
        tools: &config.tools,
    };
    let version = resolve_version(&ctx)?;

    let created = workdir::within(&directory, || match config.git.backend {
        GitBackend::Cli => tag_if_absent(&GitCli::new(runner, env), &version, &args.message),
        GitBackend::Libgit2 => {
            tag_if_absent(&Git2Repository::open(&directory)?, &version, &args.message)
        }
    })?;

    Ok(TagOutcome { version, created })
}

/// Create an annotated tag `version` unless the repository already has it.
///
/// An empty `message` is replaced by the version.
///
/// # Returns
/// * `Ok(true)` - The tag was created
/// * `Ok(false)` - A tag with that name already existed
/// * `Err` - If listing or creating tags failed
pub fn tag_if_absent(repo: &dyn TagRepository, version: &str, message: &str) -> Result<bool> {
    let tags = repo.list_tags()?;
    if tags.iter().any(|tag| tag == version) {
        debug!(tag = %version, "tag already exists");
        return Ok(false);
    }

    let message = if message.is_empty() { version } else { message };
    repo.create_annotated_tag(version, message)?;
    info!(tag = %version, "created tag");
    Ok(true)
}

/// Tag the project in `directory` with its version, using the default
/// configuration and real processes.
///
/// # Returns
/// The resolved version
pub fn tag_version(directory: &Path, message: &str) -> Result<String> {
    let config = Config::default();
    let env = SanitizedEnv::from_process(&config.environment.strip);
    let args = TagVersionArgs {
        directory: directory.to_path_buf(),
        message: message.to_string(),
    };

    run_tag_version(&args, &config, &SystemRunner::new(), &env).map(|outcome| outcome.version)
}
