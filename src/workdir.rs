use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;

/// Scoped change of the process working directory.
///
/// Entering changes into the target directory; dropping the guard changes
/// back to the directory that was current before, on every exit path.
#[derive(Debug)]
pub struct WorkingDirectory {
    previous: PathBuf,
}

impl WorkingDirectory {
    /// Change into `target`, remembering the current directory.
    ///
    /// # Returns
    /// * `Ok(WorkingDirectory)` - Guard that restores the previous directory on drop
    /// * `Err` - If the current directory cannot be read or `target` cannot be entered
    pub fn enter(target: &Path) -> Result<Self> {
        let previous = env::current_dir()?;
        env::set_current_dir(target)?;
        debug!(from = %previous.display(), to = %target.display(), "entered directory");
        Ok(WorkingDirectory { previous })
    }

    /// Directory that will be restored
    pub fn previous(&self) -> &Path {
        &self.previous
    }
}

impl Drop for WorkingDirectory {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.previous) {
            warn!(
                directory = %self.previous.display(),
                error = %e,
                "could not restore working directory"
            );
        }
    }
}

/// Run `f` with `target` as the working directory.
pub fn within<T>(target: &Path, f: impl FnOnce() -> Result<T>) -> Result<T> {
    let _guard = WorkingDirectory::enter(target)?;
    f()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GittableError;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_enter_and_restore() {
        let original = env::current_dir().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().canonicalize().unwrap();

        {
            let guard = WorkingDirectory::enter(&target).unwrap();
            assert_eq!(env::current_dir().unwrap(), target);
            assert_eq!(guard.previous(), original.as_path());
        }

        assert_eq!(env::current_dir().unwrap(), original);
    }

    #[test]
    #[serial]
    fn test_restored_after_error() {
        let original = env::current_dir().unwrap();
        let temp_dir = TempDir::new().unwrap();

        let result: Result<()> = within(temp_dir.path(), || Err(GittableError::git("boom")));

        assert!(result.is_err());
        assert_eq!(env::current_dir().unwrap(), original);
    }

    #[test]
    #[serial]
    fn test_missing_target_leaves_directory_alone() {
        let original = env::current_dir().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        assert!(WorkingDirectory::enter(&missing).is_err());
        assert_eq!(env::current_dir().unwrap(), original);
    }
}
