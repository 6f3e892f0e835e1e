use crate::error::{Result, SetVersionError};
use crate::git::Repository;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    commit_count: Option<usize>,
}

impl MockRepository {
    /// Create a mock repository with an empty history
    pub fn new() -> Self {
        MockRepository {
            commit_count: Some(0),
        }
    }

    /// Create a mock repository reporting a fixed number of commits
    pub fn with_commit_count(count: usize) -> Self {
        MockRepository {
            commit_count: Some(count),
        }
    }

    /// Create a mock repository whose history query always fails
    pub fn failing() -> Self {
        MockRepository { commit_count: None }
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn count_commits(&self) -> Result<usize> {
        self.commit_count
            .ok_or_else(|| SetVersionError::Git(git2::Error::from_str("history unavailable")))
    }
}
