//! Repository history abstraction
//!
//! The version minor component is derived from the number of commits in the
//! project history. This module hides where that number comes from behind the
//! [Repository] trait so the rest of the crate can be exercised with a
//! [mock::MockRepository] in tests.
//!
//! - [repository::Git2Repository]: real history read through the `git2` crate
//! - [mock::MockRepository]: fixed answers for tests
//!
//! ```rust
//! # use set_version::git::{MockRepository, Repository};
//! let repo = MockRepository::with_commit_count(65);
//! assert_eq!(repo.count_commits().unwrap(), 65);
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Source of the project's commit history.
///
/// ## Error Handling
///
/// Implementations map their underlying failures (like `git2::Error`) to
/// [crate::error::SetVersionError]. A failure here aborts the whole run, as no
/// version can be derived without it.
pub trait Repository {
    /// Count every commit reachable from any reference.
    ///
    /// Equivalent to `git rev-list --all --count`: each commit is counted once
    /// even when several branches or tags reach it.
    fn count_commits(&self) -> Result<usize>;
}
