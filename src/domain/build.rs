use crate::error::{Result, SetVersionError};
use std::fmt;

/// Calibration offset subtracted from the commit count so minor numbering
/// starts at a chosen baseline.
pub const DEFAULT_OFFSET: u32 = 23;

/// Build identifier derived from repository history: `commits + 1 - offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BuildCount(u32);

impl BuildCount {
    pub fn new(value: u32) -> Self {
        BuildCount(value)
    }

    /// Derive the build count from a total commit count.
    ///
    /// Fails when the history is shorter than the offset allows, since the
    /// count is never negative.
    pub fn from_commits(commit_count: usize, offset: u32) -> Result<Self> {
        let next = commit_count as u64 + 1;
        let value = next.checked_sub(u64::from(offset)).ok_or_else(|| {
            SetVersionError::build_count(format!(
                "{} commits is below the offset of {}",
                commit_count, offset
            ))
        })?;
        let value = u32::try_from(value).map_err(|_| {
            SetVersionError::build_count(format!("{} commits overflows the minor field", value))
        })?;
        Ok(BuildCount(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for BuildCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
