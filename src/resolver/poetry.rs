use tracing::debug;

use crate::process::CommandLine;
use crate::resolver::{non_empty, ResolveContext};

/// Ask `poetry version`, if poetry is installed.
pub fn poetry_version(ctx: &ResolveContext<'_>) -> Option<String> {
    let Some(poetry) = ctx.runner.resolve(&ctx.tools.poetry) else {
        debug!(tool = %ctx.tools.poetry, "not found on PATH");
        return None;
    };

    let command = CommandLine::new(poetry.to_string_lossy(), ["version"]);
    match ctx.run(&command) {
        Ok(output) => non_empty(last_word(output.stdout.trim())),
        Err(e) => {
            debug!(command = %command, error = %e, "poetry gave no version");
            None
        }
    }
}

/// Poetry prints `<name> <version>`; keep what follows the last space.
fn last_word(line: &str) -> &str {
    line.rsplit(' ').next().unwrap_or(line)
}
