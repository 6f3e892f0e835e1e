use crate::error::Result;
use git2::Repository as Git2Repo;
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

impl super::Repository for Git2Repository {
    fn count_commits(&self) -> Result<usize> {
        let mut revwalk = self.repo.revwalk()?;

        // Every ref under refs/, plus HEAD for detached checkouts.
        revwalk.push_glob("*")?;
        match revwalk.push_head() {
            Ok(()) => {}
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => {}
            Err(e) if e.code() == git2::ErrorCode::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        let mut count = 0;
        for oid_result in revwalk {
            oid_result?;
            count += 1;
        }

        Ok(count)
    }
}
