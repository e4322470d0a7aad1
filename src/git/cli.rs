use crate::environment::SanitizedEnv;
use crate::error::Result;
use crate::git::{parse_tag_list, TagRepository};
use crate::process::{CommandLine, CommandRunner};

/// Tags through the `git` executable
///
/// Commands run in the current working directory with the sanitized
/// environment.
pub struct GitCli<'a> {
    runner: &'a dyn CommandRunner,
    env: &'a SanitizedEnv,
}

impl<'a> GitCli<'a> {
    pub fn new(runner: &'a dyn CommandRunner, env: &'a SanitizedEnv) -> Self {
        GitCli { runner, env }
    }
}

impl TagRepository for GitCli<'_> {
    fn list_tags(&self) -> Result<Vec<String>> {
        let output = self
            .runner
            .run(&CommandLine::new("git", ["tag"]), self.env)?;
        Ok(parse_tag_list(&output.stdout))
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        let command = CommandLine::new("git", ["tag", "-a", name, "-m", message]);
        self.runner.run(&command, self.env)?;
        Ok(())
    }
}
