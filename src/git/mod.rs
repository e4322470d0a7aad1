//! Git tag operations abstraction layer
//!
//! Tagging only needs two things from a repository: the names of the tags it
//! already has, and a way to add an annotated tag on `HEAD`. The
//! [TagRepository] trait captures that, with these implementations:
//!
//! - [cli::GitCli]: spawns `git tag` through a [crate::process::CommandRunner]
//! - [repository::Git2Repository]: the same operations through the `git2` crate
//! - [mock::MockRepository]: in-memory tags for testing
//!
//! ```rust
//! # use gittable::git::{MockRepository, TagRepository};
//! # fn example() -> gittable::Result<()> {
//! let repo = MockRepository::new();
//! if !repo.list_tags()?.iter().any(|tag| tag == "1.2.3") {
//!     repo.create_annotated_tag("1.2.3", "1.2.3")?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod mock;
pub mod repository;

pub use cli::GitCli;
pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Tag listing and creation
///
/// Implementations operate on the repository containing the current working
/// directory (CLI) or the one they were opened on (libgit2). Errors from the
/// underlying git operation are returned unmodified.
pub trait TagRepository {
    /// Get all tag names in the repository
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names; empty when the repository has none
    /// * `Err` - If listing fails
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Create an annotated tag on `HEAD`
    ///
    /// # Arguments
    /// * `name` - Name for the new tag
    /// * `message` - Tag message
    ///
    /// # Returns
    /// * `Ok(())` - Tag created
    /// * `Err` - If the tag exists already, `HEAD` is unborn, or git fails
    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()>;
}

/// Parse `git tag` output into tag names.
///
/// Lines are trimmed and blank lines dropped, so a repository without tags
/// yields an empty list rather than a single empty name.
pub fn parse_tag_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
