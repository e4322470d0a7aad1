use tracing::debug;

use crate::process::CommandLine;
use crate::resolver::{non_empty, ResolveContext};

/// Ask `hatch version`, if hatch is installed.
pub fn hatch_version(ctx: &ResolveContext<'_>) -> Option<String> {
    let Some(hatch) = ctx.runner.resolve(&ctx.tools.hatch) else {
        debug!(tool = %ctx.tools.hatch, "not found on PATH");
        return None;
    };

    let command = CommandLine::new(hatch.to_string_lossy(), ["version"]);
    match ctx.run(&command) {
        Ok(output) => non_empty(output.stdout.trim()),
        Err(e) => {
            debug!(command = %command, error = %e, "hatch gave no version");
            None
        }
    }
}
