//! Per-format line matchers for the files that carry the project version.
//!
//! Each target knows one file format: how to recognise a line that holds the
//! version and how to splice a freshly rendered version into it. Targets never
//! touch the filesystem; [crate::rewrite] drives them line by line.

pub mod badge;
pub mod resource;
pub mod source;

pub use badge::DocumentationBadge;
pub use resource::ResourceBlock;
pub use source::SourceDeclaration;

use crate::domain::VersionTuple;
use std::fmt;
use std::path::Path;

/// The kinds of file set-version knows how to update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Source,
    Documentation,
    Resource,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::Source => write!(f, "source"),
            TargetKind::Documentation => write!(f, "documentation"),
            TargetKind::Resource => write!(f, "resource"),
        }
    }
}

/// Outcome of offering a single line to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRewrite {
    /// The line carries no version marker
    Unchanged,
    /// The line carried the marker; this is its replacement
    Replaced(String),
    /// The line carries the marker but not in a shape the target understands
    Malformed(String),
}

/// A file whose version-bearing lines can be rewritten.
pub trait VersionTarget {
    fn kind(&self) -> TargetKind;

    fn path(&self) -> &Path;

    /// Human readable marker, used when no line in the file matches
    fn marker(&self) -> &str;

    /// Rewrite one line (without its terminator) for the given version.
    fn rewrite_line(&self, line: &str, version: &VersionTuple) -> LineRewrite;
}
