use crate::domain::build::BuildCount;
use crate::domain::style::RenderStyle;
use crate::error::{Result, SetVersionError};
use std::fmt;

/// Four-part project version as carried by the source declaration.
///
/// `extra` keeps the fourth field exactly as written (quotes included), so the
/// declaration can be re-emitted without changing its syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTuple {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub extra: String,
}

impl VersionTuple {
    /// Create a new version tuple
    pub fn new(major: u32, minor: u32, patch: u32, extra: impl Into<String>) -> Self {
        VersionTuple {
            major,
            minor,
            patch,
            extra: extra.into(),
        }
    }

    /// Parse the comma separated field list found between `VERSION(` and `)`.
    ///
    /// Exactly four fields are expected; the fourth keeps any commas it contains.
    ///
    /// # Example
    /// ```
    /// # use set_version::domain::VersionTuple;
    /// let v = VersionTuple::parse_fields(r#"1, 5, 2, "rc1""#).unwrap();
    /// assert_eq!(v, VersionTuple::new(1, 5, 2, r#""rc1""#));
    /// ```
    pub fn parse_fields(fields: &str) -> Result<Self> {
        let parts: Vec<&str> = fields.splitn(4, ',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(SetVersionError::version(format!(
                "Invalid version declaration: '{}' - expected major, minor, patch, extra",
                fields
            )));
        }

        let major = parts[0].parse::<u32>().map_err(|_| {
            SetVersionError::version(format!("Invalid major version: {}", parts[0]))
        })?;
        let minor = parts[1].parse::<u32>().map_err(|_| {
            SetVersionError::version(format!("Invalid minor version: {}", parts[1]))
        })?;
        let patch = parts[2].parse::<u32>().map_err(|_| {
            SetVersionError::version(format!("Invalid patch version: {}", parts[2]))
        })?;

        Ok(VersionTuple::new(major, minor, patch, parts[3]))
    }

    /// Replace the minor component with the derived build count.
    pub fn with_build_count(self, build: BuildCount) -> Self {
        VersionTuple {
            minor: build.value(),
            ..self
        }
    }

    /// The extra field with one pair of surrounding double quotes removed.
    pub fn label(&self) -> &str {
        let extra = self.extra.trim();
        extra
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(extra)
    }

    /// Whether the tuple carries a non-empty extra label.
    pub fn has_extra(&self) -> bool {
        !self.label().is_empty()
    }
}

impl fmt::Display for VersionTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&RenderStyle::DOTTED.render(self))
    }
}
