use serde::Deserialize;
use tracing::debug;

use crate::error::{format_error_chain, GittableError, Result};
use crate::process::CommandLine;
use crate::resolver::ResolveContext;

/// Interpreters tried on `PATH` when none is configured
const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];

#[derive(Debug, Deserialize)]
struct InstalledPackage {
    version: String,
}

/// Install the project in editable mode and read its version from pip.
///
/// Unlike the other strategies, failure here is an error carrying the
/// command that failed, its captured output and the cause chain.
pub fn pip_version(ctx: &ResolveContext<'_>) -> Result<String> {
    let python = python_interpreter(ctx);
    let directory = ctx.directory.to_string_lossy();

    let install = install_command(&python, &directory);
    ctx.run(&install)
        .map_err(|e| version_not_found(ctx, &install, e))?;

    let list = list_command(&python, &directory);
    let output = ctx
        .run(&list)
        .map_err(|e| version_not_found(ctx, &list, e))?;

    let version =
        parse_pip_list(&output.stdout).map_err(|e| version_not_found(ctx, &list, e))?;
    debug!(strategy = "pip", version = %version, "version resolved");
    Ok(version)
}

/// `<python> -m pip install --no-deps --no-compile -e <directory>`
pub fn install_command(python: &str, directory: &str) -> CommandLine {
    CommandLine::new(
        python,
        [
            "-m",
            "pip",
            "install",
            "--no-deps",
            "--no-compile",
            "-e",
            directory,
        ],
    )
}

/// `<python> -m pip list --format json --path <directory>`
pub fn list_command(python: &str, directory: &str) -> CommandLine {
    CommandLine::new(
        python,
        ["-m", "pip", "list", "--format", "json", "--path", directory],
    )
}

/// Version of the first package in `pip list --format json` output
pub fn parse_pip_list(stdout: &str) -> Result<String> {
    let packages: Vec<InstalledPackage> =
        serde_json::from_str(stdout).map_err(|e| GittableError::metadata(e.to_string()))?;

    let first = packages
        .into_iter()
        .next()
        .ok_or_else(|| GittableError::metadata("pip listed no packages"))?;

    if first.version.trim().is_empty() {
        return Err(GittableError::metadata("package has an empty version"));
    }
    Ok(first.version)
}

fn python_interpreter(ctx: &ResolveContext<'_>) -> String {
    if let Some(python) = &ctx.tools.python {
        return python.clone();
    }

    PYTHON_CANDIDATES
        .iter()
        .find_map(|candidate| ctx.runner.resolve(candidate))
        .map(|path| path.to_string_lossy().into_owned())
        .unwrap_or_else(|| PYTHON_CANDIDATES[0].to_string())
}

fn version_not_found(
    ctx: &ResolveContext<'_>,
    command: &CommandLine,
    err: GittableError,
) -> GittableError {
    let mut output = err.captured_output().to_string();
    if !output.is_empty() {
        output.push('\n');
    }

    GittableError::VersionNotFound {
        directory: ctx.directory.to_path_buf(),
        command: command.clone(),
        output,
        trace: format_error_chain(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_first_package_version() {
        let stdout = r#"[
            {"name": "my-package", "version": "0.3.0", "editable_project_location": "/src"},
            {"name": "other", "version": "9.9.9"}
        ]"#;
        assert_eq!(parse_pip_list(stdout).unwrap(), "0.3.0");
    }

    #[test]
    fn test_parse_empty_list_is_error() {
        let err = parse_pip_list("[]").unwrap_err();
        assert!(err.to_string().contains("no packages"));
    }

    #[test]
    fn test_parse_invalid_json_is_error() {
        assert!(matches!(
            parse_pip_list("WARNING: not json"),
            Err(GittableError::Metadata(_))
        ));
    }

    #[test]
    fn test_parse_missing_version_is_error() {
        assert!(parse_pip_list(r#"[{"name": "pkg"}]"#).is_err());
    }

    #[test]
    fn test_command_shapes() {
        assert_eq!(
            install_command("python3", "/src/pkg").args_line(),
            "python3 -m pip install --no-deps --no-compile -e /src/pkg"
        );
        assert_eq!(
            list_command("python3", "/src/pkg").args_line(),
            "python3 -m pip list --format json --path /src/pkg"
        );
    }
}
