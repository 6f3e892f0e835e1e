use crate::domain::{RenderStyle, VersionTuple};
use crate::error::{Result, SetVersionError};
use crate::targets::{LineRewrite, TargetKind, VersionTarget};
use regex::{NoExpand, Regex};
use std::path::{Path, PathBuf};

/// A version badge URL such as `badge/version-0.46.0-beta-brightgreen`.
#[derive(Debug, Clone)]
pub struct DocumentationBadge {
    path: PathBuf,
    marker: String,
    suffix: String,
    pattern: Regex,
}

impl DocumentationBadge {
    /// Build a badge matcher for the segment between `marker` and `suffix`.
    ///
    /// The version segment cannot cross whitespace, a path separator or the
    /// closing bracket of a markdown link, so it never spans two badges.
    pub fn new(
        path: impl Into<PathBuf>,
        marker: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Result<Self> {
        let marker = marker.into();
        let suffix = suffix.into();
        let pattern = Regex::new(&format!(
            r"{}(?P<version>[^\s/)\]]*?){}",
            regex::escape(&marker),
            regex::escape(&suffix)
        ))
        .map_err(|e| SetVersionError::config(format!("Invalid badge pattern: {}", e)))?;

        Ok(DocumentationBadge {
            path: path.into(),
            marker,
            suffix,
            pattern,
        })
    }
}

impl VersionTarget for DocumentationBadge {
    fn kind(&self) -> TargetKind {
        TargetKind::Documentation
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn marker(&self) -> &str {
        &self.marker
    }

    fn rewrite_line(&self, line: &str, version: &VersionTuple) -> LineRewrite {
        if !line.contains(&self.marker) {
            return LineRewrite::Unchanged;
        }
        let badges = self.pattern.find_iter(line).count();
        if badges != line.matches(self.marker.as_str()).count() {
            return LineRewrite::Malformed(format!(
                "badge '{}' is not terminated by '{}'",
                self.marker, self.suffix
            ));
        }

        let replacement = format!(
            "{}{}{}",
            self.marker,
            RenderStyle::BADGE.render(version),
            self.suffix
        );
        LineRewrite::Replaced(
            self.pattern
                .replace_all(line, NoExpand(&replacement))
                .into_owned(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> DocumentationBadge {
        DocumentationBadge::new("README.md", "badge/version-", "-brightgreen").unwrap()
    }

    const BADGE_LINE: &str =
        "[![Version](https://img.shields.io/badge/version-0.46.0-beta-brightgreen.svg)](#)";

    #[test]
    fn test_rewrite_simplified_label() {
        let version = VersionTuple::new(0, 47, 0, "utils::version::prerelease::beta");
        assert_eq!(
            target().rewrite_line(BADGE_LINE, &version),
            LineRewrite::Replaced(
                "[![Version](https://img.shields.io/badge/version-0.47.0-beta-brightgreen.svg)](#)"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_rewrite_empty_extra() {
        let version = VersionTuple::new(2, 43, 1, "\"\"");
        let LineRewrite::Replaced(line) =
            target().rewrite_line("![v](badge/version-2.40.1-brightgreen)", &version)
        else {
            panic!("line should be rewritten");
        };
        assert_eq!(line, "![v](badge/version-2.43.1.0-brightgreen)");
    }

    #[test]
    fn test_rewrite_every_badge_on_line() {
        let version = VersionTuple::new(1, 2, 3, "\"rc1\"");
        let line = "badge/version-1.0.0-brightgreen and badge/version-0.9.0-brightgreen";
        assert_eq!(
            target().rewrite_line(line, &version),
            LineRewrite::Replaced(
                "badge/version-1.2.3-rc1-brightgreen and badge/version-1.2.3-rc1-brightgreen"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_rewrite_unchanged_and_malformed() {
        let version = VersionTuple::new(1, 2, 3, "");
        assert_eq!(
            target().rewrite_line("# Project title", &version),
            LineRewrite::Unchanged
        );
        assert!(matches!(
            target().rewrite_line("badge/version-1.0.0-blue", &version),
            LineRewrite::Malformed(_)
        ));
    }

    #[test]
    fn test_neighbouring_badge_is_kept() {
        let version = VersionTuple::new(1, 9, 0, "");
        let line = "[![v](https://img.shields.io/badge/version-1.0.0-brightgreen.svg)](#) \
                    [![b](https://img.shields.io/badge/build-passing-brightgreen.svg)](#)";
        assert_eq!(
            target().rewrite_line(line, &version),
            LineRewrite::Replaced(
                "[![v](https://img.shields.io/badge/version-1.9.0.0-brightgreen.svg)](#) \
                 [![b](https://img.shields.io/badge/build-passing-brightgreen.svg)](#)"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_badge_without_suffix_does_not_reach_next_badge() {
        let version = VersionTuple::new(1, 9, 0, "");
        let line = "[![v](https://img.shields.io/badge/version-1.0.0-blue.svg)](#) \
                    [![b](https://img.shields.io/badge/build-passing-brightgreen.svg)](#)";
        assert!(matches!(
            target().rewrite_line(line, &version),
            LineRewrite::Malformed(_)
        ));
    }

    #[test]
    fn test_one_malformed_badge_among_several() {
        let version = VersionTuple::new(1, 9, 0, "");
        let line = "badge/version-1.0.0-brightgreen badge/version-1.0.0-blue";
        assert!(matches!(
            target().rewrite_line(line, &version),
            LineRewrite::Malformed(_)
        ));
    }

    #[test]
    fn test_replacement_is_not_expanded() {
        let badge = DocumentationBadge::new("README.md", "badge/$version-", "-green").unwrap();
        let version = VersionTuple::new(1, 2, 3, "");
        assert_eq!(
            badge.rewrite_line("badge/$version-1.0.0.0-green", &version),
            LineRewrite::Replaced("badge/$version-1.2.3.0-green".to_string())
        );
    }
}
