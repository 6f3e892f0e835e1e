use crate::domain::{RenderStyle, VersionTuple};
use crate::targets::{LineRewrite, TargetKind, VersionTarget};
use std::ops::Range;
use std::path::{Path, PathBuf};

/// The `VERSION(major, minor, patch, extra)` declaration in the primary source file.
#[derive(Debug, Clone)]
pub struct SourceDeclaration {
    path: PathBuf,
    marker: String,
}

/// Where a declaration's field list sits inside a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationMatch {
    /// The marker does not occur in the line
    Absent,
    /// Byte range of the text between the parentheses
    Fields(Range<usize>),
    /// The marker occurs but no balanced field list follows it
    Unbalanced,
}

impl SourceDeclaration {
    pub fn new(path: impl Into<PathBuf>, marker: impl Into<String>) -> Self {
        SourceDeclaration {
            path: path.into(),
            marker: marker.into(),
        }
    }

    /// Locate the parenthesized field list following the marker.
    ///
    /// The marker may or may not include the opening parenthesis. Nested
    /// parentheses inside the fields are skipped over, as is anything inside a
    /// double-quoted string literal.
    pub fn find(&self, line: &str) -> DeclarationMatch {
        let Some(start) = line.find(&self.marker) else {
            return DeclarationMatch::Absent;
        };

        let after_marker = start + self.marker.len();
        let open = if self.marker.ends_with('(') {
            after_marker - 1
        } else {
            let rest = &line[after_marker..];
            let trimmed = rest.trim_start();
            if !trimmed.starts_with('(') {
                return DeclarationMatch::Unbalanced;
            }
            after_marker + (rest.len() - trimmed.len())
        };

        let mut depth = 0usize;
        let mut in_string = false;
        let mut escaped = false;
        for (offset, ch) in line[open..].char_indices() {
            if in_string {
                match ch {
                    _ if escaped => escaped = false,
                    '\\' => escaped = true,
                    '"' => in_string = false,
                    _ => {}
                }
                continue;
            }
            match ch {
                '"' => in_string = true,
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        return DeclarationMatch::Fields(open + 1..open + offset);
                    }
                }
                _ => {}
            }
        }

        DeclarationMatch::Unbalanced
    }

    /// Parse the declaration's version, if this line carries one.
    pub fn parse_line(&self, line: &str) -> Option<crate::error::Result<VersionTuple>> {
        match self.find(line) {
            DeclarationMatch::Absent => None,
            DeclarationMatch::Fields(range) => Some(VersionTuple::parse_fields(&line[range])),
            DeclarationMatch::Unbalanced => Some(Err(crate::error::SetVersionError::version(
                format!("Unbalanced parentheses after '{}'", self.marker),
            ))),
        }
    }
}

impl VersionTarget for SourceDeclaration {
    fn kind(&self) -> TargetKind {
        TargetKind::Source
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn marker(&self) -> &str {
        &self.marker
    }

    fn rewrite_line(&self, line: &str, version: &VersionTuple) -> LineRewrite {
        match self.find(line) {
            DeclarationMatch::Absent => LineRewrite::Unchanged,
            DeclarationMatch::Unbalanced => LineRewrite::Malformed(format!(
                "no closing parenthesis after '{}'",
                self.marker
            )),
            DeclarationMatch::Fields(range) => {
                let rendered = RenderStyle::DECLARATION.render(version);
                LineRewrite::Replaced(format!(
                    "{}{}{}",
                    &line[..range.start],
                    rendered,
                    &line[range.end..]
                ))
            }
        }
    }
}
