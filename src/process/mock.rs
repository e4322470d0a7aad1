use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use crate::environment::SanitizedEnv;
use crate::error::{GittableError, Result};
use crate::process::{CommandLine, CommandOutput, CommandRunner};

/// Scripted result for one command line
#[derive(Debug, Clone, PartialEq)]
pub enum MockResponse {
    /// Exit 0 with the given stdout
    Success(String),
    /// Exit non-zero with the given code and stderr
    Failure { code: i32, stderr: String },
    /// The program could not be spawned at all
    SpawnError,
}

/// One recorded call to [MockRunner::run]
#[derive(Debug, Clone)]
pub struct Invocation {
    pub command: CommandLine,
    /// Working directory of the process at the time of the call
    pub directory: Option<PathBuf>,
    pub env: SanitizedEnv,
}

/// Mock runner for testing without spawning processes
///
/// Responses are keyed by the rendered command line (see
/// [CommandLine::args_line]). Unscripted commands behave like a missing
/// program.
#[derive(Debug, Default)]
pub struct MockRunner {
    programs: HashSet<String>,
    responses: HashMap<String, MockResponse>,
    invocations: RefCell<Vec<Invocation>>,
}

impl MockRunner {
    /// Create a runner with no programs on its path
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `program` resolvable
    pub fn add_program(&mut self, program: impl Into<String>) {
        self.programs.insert(program.into());
    }

    /// Script the response for a command line
    pub fn respond(&mut self, command: &CommandLine, response: MockResponse) {
        self.responses.insert(command.args_line(), response);
    }

    /// Every command run so far, in order
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }

    /// Rendered command lines run so far, in order
    pub fn commands(&self) -> Vec<String> {
        self.invocations
            .borrow()
            .iter()
            .map(|invocation| invocation.command.args_line())
            .collect()
    }
}

impl CommandRunner for MockRunner {
    fn resolve(&self, program: &str) -> Option<PathBuf> {
        self.programs
            .contains(program)
            .then(|| PathBuf::from(program))
    }

    fn run(&self, command: &CommandLine, env: &SanitizedEnv) -> Result<CommandOutput> {
        self.invocations.borrow_mut().push(Invocation {
            command: command.clone(),
            directory: std::env::current_dir().ok(),
            env: env.clone(),
        });

        match self.responses.get(&command.args_line()) {
            Some(MockResponse::Success(stdout)) => Ok(CommandOutput {
                stdout: stdout.clone(),
                stderr: String::new(),
            }),
            Some(MockResponse::Failure { code, stderr }) => Err(GittableError::Command {
                command: command.clone(),
                status: format!("exit status: {}", code),
                stdout: String::new(),
                stderr: stderr.clone(),
            }),
            Some(MockResponse::SpawnError) | None => Err(GittableError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("program not found: {}", command.program),
            ))),
        }
    }
}
