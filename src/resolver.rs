//! Version resolution: the existing declaration with a derived minor component.

use crate::domain::{BuildCount, VersionTuple};
use crate::error::{Result, SetVersionError};
use crate::targets::{SourceDeclaration, VersionTarget};
use std::fs;

/// Parse a declaration line and inject the build count as its minor component.
///
/// # Example
/// ```
/// # use set_version::domain::{BuildCount, VersionTuple};
/// # use set_version::resolver::resolve;
/// # use set_version::targets::SourceDeclaration;
/// let source = SourceDeclaration::new("main.cpp", "VERSION(");
/// let v = resolve(&source, r#"FOO_VERSION(1, 5, 2, "rc1")"#, BuildCount::new(43)).unwrap();
/// assert_eq!(v, VersionTuple::new(1, 43, 2, r#""rc1""#));
/// ```
pub fn resolve(
    source: &SourceDeclaration,
    declaration_line: &str,
    build: BuildCount,
) -> Result<VersionTuple> {
    let parsed = source.parse_line(declaration_line).ok_or_else(|| {
        SetVersionError::version(format!(
            "'{}' does not contain '{}'",
            declaration_line.trim(),
            source.marker()
        ))
    })??;
    Ok(parsed.with_build_count(build))
}

/// Resolve the version from the first declaration in the source file.
pub fn resolve_file(source: &SourceDeclaration, build: BuildCount) -> Result<VersionTuple> {
    let content = fs::read_to_string(source.path())
        .map_err(|e| SetVersionError::file(source.path(), e))?;
    let line = content
        .lines()
        .find(|line| line.contains(source.marker()))
        .ok_or_else(|| SetVersionError::marker_not_found(source.path(), source.marker()))?;
    resolve(source, line, build)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> SourceDeclaration {
        SourceDeclaration::new("main.cpp", "VERSION(")
    }

    #[test]
    fn test_resolve_replaces_minor_only() {
        let v = resolve(
            &source(),
            "static constexpr utils::Version VERSION(2, 40, 1, \"\");",
            BuildCount::new(43),
        )
        .unwrap();
        assert_eq!(v, VersionTuple::new(2, 43, 1, "\"\""));
    }

    #[test]
    fn test_resolve_missing_marker() {
        let err = resolve(&source(), "int main() {}", BuildCount::new(1)).unwrap_err();
        assert!(err.to_string().contains("VERSION("));
    }

    #[test]
    fn test_resolve_malformed_fields() {
        assert!(resolve(&source(), "VERSION(1, two, 3, x)", BuildCount::new(1)).is_err());
        assert!(resolve(&source(), "VERSION(1, 2, 3", BuildCount::new(1)).is_err());
    }

    #[test]
    fn test_resolve_file_uses_first_declaration() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.cpp");
        fs::write(
            &path,
            "// header\nVERSION(0, 46, 0, beta);\nVERSION(9, 9, 9, old);\n",
        )
        .unwrap();

        let v = resolve_file(&SourceDeclaration::new(&path, "VERSION("), BuildCount::new(50))
            .unwrap();
        assert_eq!(v, VersionTuple::new(0, 50, 0, "beta"));
    }

    #[test]
    fn test_resolve_file_without_declaration() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.cpp");
        fs::write(&path, "int main() {}\n").unwrap();

        let err = resolve_file(&SourceDeclaration::new(&path, "VERSION("), BuildCount::new(1))
            .unwrap_err();
        assert!(matches!(err, SetVersionError::MarkerNotFound { .. }));
    }
}
