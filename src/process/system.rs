use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::environment::SanitizedEnv;
use crate::error::{GittableError, Result};
use crate::process::{CommandLine, CommandOutput, CommandRunner};

/// Runs commands as real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        SystemRunner
    }
}

impl CommandRunner for SystemRunner {
    fn resolve(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }

    fn run(&self, command: &CommandLine, env: &SanitizedEnv) -> Result<CommandOutput> {
        debug!(command = %command, "running");

        let output = Command::new(&command.program)
            .args(&command.args)
            .env_clear()
            .envs(env.iter())
            .output()?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(GittableError::Command {
                command: command.clone(),
                status: output.status.to_string(),
                stdout,
                stderr,
            });
        }

        Ok(CommandOutput { stdout, stderr })
    }
}
