use std::path::{Path, PathBuf};
use thiserror::Error;

/// Unified error type for set-version operations
#[derive(Error, Debug)]
pub enum SetVersionError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Build count error: {0}")]
    BuildCount(String),

    #[error("Marker '{}' not found in {}", .marker, .path.display())]
    MarkerNotFound { path: PathBuf, marker: String },

    #[error("Malformed line {line_number}: {reason}")]
    Malformed { line_number: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("I/O error on {}: {source}", .path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience type alias for Results in set-version
pub type Result<T> = std::result::Result<T, SetVersionError>;

impl SetVersionError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SetVersionError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        SetVersionError::Version(msg.into())
    }

    /// Create a build count error with context
    pub fn build_count(msg: impl Into<String>) -> Self {
        SetVersionError::BuildCount(msg.into())
    }

    /// Create a marker-not-found error for a file
    pub fn marker_not_found(path: &Path, marker: impl Into<String>) -> Self {
        SetVersionError::MarkerNotFound {
            path: path.to_path_buf(),
            marker: marker.into(),
        }
    }

    /// Wrap an I/O error with the file it happened on
    pub fn file(path: &Path, source: std::io::Error) -> Self {
        SetVersionError::File {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a malformed-line error; `line_number` is 1-based
    pub fn malformed(line_number: usize, reason: impl Into<String>) -> Self {
        SetVersionError::Malformed {
            line_number,
            reason: reason.into(),
        }
    }
}
