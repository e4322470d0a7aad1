use crate::error::Result;
use crate::git::TagRepository;
use git2::{ObjectType, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl TagRepository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        let head = self.repo.head()?.peel(ObjectType::Commit)?;
        let tagger = self.repo.signature()?;

        self.repo.tag(name, &head, &tagger, message, false)?;

        Ok(())
    }
}
