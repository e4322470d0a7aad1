use std::cell::{Cell, RefCell};

use crate::error::{GittableError, Result};
use crate::git::TagRepository;

/// Mock repository for testing without actual git operations
#[derive(Debug, Default)]
pub struct MockRepository {
    tags: RefCell<Vec<String>>,
    messages: RefCell<Vec<(String, String)>>,
    fail_listing: Cell<bool>,
}

impl MockRepository {
    /// Create a new mock repository without tags
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock repository with pre-existing tags
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let repo = Self::new();
        repo.tags
            .borrow_mut()
            .extend(tags.into_iter().map(Into::into));
        repo
    }

    /// Make every subsequent `list_tags` call fail
    pub fn fail_listing(&self) {
        self.fail_listing.set(true);
    }

    /// Tags created through [TagRepository::create_annotated_tag], with messages
    pub fn created(&self) -> Vec<(String, String)> {
        self.messages.borrow().clone()
    }
}

impl TagRepository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        if self.fail_listing.get() {
            return Err(GittableError::git("mock listing failure"));
        }
        Ok(self.tags.borrow().clone())
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        if self.tags.borrow().iter().any(|tag| tag == name) {
            return Err(GittableError::git(format!("tag '{}' already exists", name)));
        }
        self.tags.borrow_mut().push(name.to_string());
        self.messages
            .borrow_mut()
            .push((name.to_string(), message.to_string()));
        Ok(())
    }
}
