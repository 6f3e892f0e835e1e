//! Line-by-line file rewriting.
//!
//! A file is read in full, every line is offered to a target, and the result is
//! written to a temporary file in the same directory which then replaces the
//! original. Either every line is updated or the file is left untouched.

use crate::config::LineEnding;
use crate::domain::VersionTuple;
use crate::error::{Result, SetVersionError};
use crate::targets::{LineRewrite, VersionTarget};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// What a rewrite did to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteSummary {
    /// Lines written, equal to the lines read
    pub lines: usize,
    /// Lines that carried the marker and were replaced
    pub replaced: usize,
}

/// Transform every line of `content`.
///
/// Trailing whitespace is trimmed from each line and every line, including the
/// last, is terminated with `line_ending`. Returns the new content and the
/// number of replaced lines. Line numbers in errors are 1-based.
pub fn transform_lines<F>(
    content: &str,
    line_ending: LineEnding,
    mut transform: F,
) -> Result<(String, RewriteSummary)>
where
    F: FnMut(&str) -> LineRewrite,
{
    let terminator = line_ending.as_str();
    let mut output = String::with_capacity(content.len() + 16);
    let mut summary = RewriteSummary {
        lines: 0,
        replaced: 0,
    };

    for (index, line) in content.lines().enumerate() {
        let line = match transform(line) {
            LineRewrite::Unchanged => line.to_string(),
            LineRewrite::Replaced(new_line) => {
                summary.replaced += 1;
                new_line
            }
            LineRewrite::Malformed(reason) => {
                return Err(SetVersionError::malformed(index + 1, reason));
            }
        };
        output.push_str(line.trim_end());
        output.push_str(terminator);
        summary.lines += 1;
    }

    Ok((output, summary))
}

/// Rewrite a file in place through `transform`.
///
/// A file in which no line was replaced is reported as
/// [`SetVersionError::MarkerNotFound`] and left as it was.
pub fn rewrite_file<F>(
    path: &Path,
    marker: &str,
    line_ending: LineEnding,
    transform: F,
) -> Result<RewriteSummary>
where
    F: FnMut(&str) -> LineRewrite,
{
    let content = fs::read_to_string(path).map_err(|e| SetVersionError::file(path, e))?;
    let (output, summary) = transform_lines(&content, line_ending, transform)?;

    if summary.replaced == 0 {
        return Err(SetVersionError::marker_not_found(path, marker));
    }

    write_atomic(path, &output)?;
    Ok(summary)
}

/// Rewrite every version-bearing line of a target's file.
pub fn apply_target(
    target: &dyn VersionTarget,
    version: &VersionTuple,
    line_ending: LineEnding,
) -> Result<RewriteSummary> {
    rewrite_file(target.path(), target.marker(), line_ending, |line| {
        target.rewrite_line(line, version)
    })
}

/// Replace `path` with `contents` via a temporary file in the same directory.
///
/// The original file's permissions are carried over to the replacement.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let wrap = |e: std::io::Error| SetVersionError::file(path, e);

    let mut tmp = NamedTempFile::new_in(parent).map_err(wrap)?;
    tmp.write_all(contents.as_bytes()).map_err(wrap)?;
    tmp.flush().map_err(wrap)?;

    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(tmp.path(), metadata.permissions()).map_err(wrap)?;
    }

    tmp.persist(path).map_err(|e| wrap(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::targets::SourceDeclaration;

    fn upper_marked(line: &str) -> LineRewrite {
        if line.contains("MARK") {
            LineRewrite::Replaced(line.to_uppercase())
        } else {
            LineRewrite::Unchanged
        }
    }

    #[test]
    fn test_transform_preserves_line_count_and_trims() {
        let input = "first   \r\nMARK second\nthird\t\n";
        let (output, summary) = transform_lines(input, LineEnding::Lf, upper_marked).unwrap();
        assert_eq!(output, "first\nMARK SECOND\nthird\n");
        assert_eq!(summary, RewriteSummary { lines: 3, replaced: 1 });
    }

    #[test]
    fn test_transform_normalizes_to_crlf() {
        let input = "a\nb\r\nc";
        let (output, summary) = transform_lines(input, LineEnding::Crlf, upper_marked).unwrap();
        assert_eq!(output, "a\r\nb\r\nc\r\n");
        assert_eq!(summary.lines, 3);
        assert_eq!(summary.replaced, 0);
    }

    #[test]
    fn test_transform_reports_malformed_line_number() {
        let input = "ok\nok\nbad\n";
        let err = transform_lines(input, LineEnding::Lf, |line| {
            if line == "bad" {
                LineRewrite::Malformed("broken".to_string())
            } else {
                LineRewrite::Unchanged
            }
        })
        .unwrap_err();
        assert!(matches!(err, SetVersionError::Malformed { line_number: 3, .. }));
    }

    #[test]
    fn test_rewrite_file_without_marker_is_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "nothing here  \r\n").unwrap();

        let err = rewrite_file(&path, "MARK", LineEnding::Lf, upper_marked).unwrap_err();
        assert!(matches!(err, SetVersionError::MarkerNotFound { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "nothing here  \r\n");
    }

    #[test]
    fn test_rewrite_file_malformed_leaves_file_intact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.cpp");
        let original = "VERSION(1, 2, 3, beta);\nVERSION(1, 2\n";
        fs::write(&path, original).unwrap();

        let target = SourceDeclaration::new(&path, "VERSION(");
        let version = VersionTuple::new(1, 9, 3, "beta");
        assert!(apply_target(&target, &version, LineEnding::Lf).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_apply_target_rewrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.cpp");
        fs::write(&path, "#include <x>\nVERSION(1, 2, 3, beta);  \nint main() {}\n").unwrap();

        let target = SourceDeclaration::new(&path, "VERSION(");
        let version = VersionTuple::new(1, 9, 3, "beta");
        let summary = apply_target(&target, &version, LineEnding::Lf).unwrap();

        assert_eq!(summary, RewriteSummary { lines: 3, replaced: 1 });
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "#include <x>\nVERSION(1, 9, 3, beta);\nint main() {}\n"
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = rewrite_file(
            &dir.path().join("absent.md"),
            "MARK",
            LineEnding::Lf,
            upper_marked,
        )
        .unwrap_err();
        assert!(matches!(err, SetVersionError::File { .. }));
        assert!(err.to_string().contains("absent.md"));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.sh");
        fs::write(&path, "old\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

        write_atomic(&path, "new\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}
