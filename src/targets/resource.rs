use crate::domain::{RenderStyle, VersionTuple};
use crate::targets::{LineRewrite, TargetKind, VersionTarget};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const MARKER: &str = "FILEVERSION/PRODUCTVERSION";

/// The `VERSIONINFO` block of a Windows resource script.
///
/// Two line shapes are updated in the same pass:
///
/// ```text
/// FILEVERSION 0,46,0,0
/// VALUE "FileVersion", "0.46.0-beta"
/// ```
#[derive(Debug, Clone)]
pub struct ResourceBlock {
    path: PathBuf,
}

fn numeric_keyword() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(?:FILEVERSION|PRODUCTVERSION)\b").expect("resource pattern is valid")
    })
}

fn numeric_value() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(?P<head>\s*(?:FILEVERSION|PRODUCTVERSION)\s+)(?P<value>\d+(?:\s*,\s*\d+)*)(?P<tail>.*)$",
        )
        .expect("resource pattern is valid")
    })
}

fn string_keyword() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#""(?:FileVersion|ProductVersion)""#).expect("resource pattern is valid")
    })
}

fn string_value() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"^(?P<head>.*"(?:FileVersion|ProductVersion)"\s*,\s*)"(?P<value>[^"\\]*)(?P<nul>\\0)?"(?P<tail>.*)$"#,
        )
        .expect("resource pattern is valid")
    })
}

impl ResourceBlock {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ResourceBlock { path: path.into() }
    }

    fn rewrite_numeric(line: &str, version: &VersionTuple) -> LineRewrite {
        let Some(caps) = numeric_value().captures(line) else {
            return LineRewrite::Malformed(
                "expected a comma separated numeric version after FILEVERSION/PRODUCTVERSION"
                    .to_string(),
            );
        };
        LineRewrite::Replaced(format!(
            "{}{}{}",
            &caps["head"],
            RenderStyle::RESOURCE_NUMERIC.render(version),
            &caps["tail"]
        ))
    }

    fn rewrite_string(line: &str, version: &VersionTuple) -> LineRewrite {
        let Some(caps) = string_value().captures(line) else {
            return LineRewrite::Malformed(
                "expected a quoted value after FileVersion/ProductVersion".to_string(),
            );
        };
        let nul = caps.name("nul").map(|m| m.as_str()).unwrap_or("");
        LineRewrite::Replaced(format!(
            "{}\"{}{}\"{}",
            &caps["head"],
            RenderStyle::RESOURCE_STRING.render(version),
            nul,
            &caps["tail"]
        ))
    }
}

impl VersionTarget for ResourceBlock {
    fn kind(&self) -> TargetKind {
        TargetKind::Resource
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn marker(&self) -> &str {
        MARKER
    }

    fn rewrite_line(&self, line: &str, version: &VersionTuple) -> LineRewrite {
        if numeric_keyword().is_match(line) {
            Self::rewrite_numeric(line, version)
        } else if string_keyword().is_match(line) {
            Self::rewrite_string(line, version)
        } else {
            LineRewrite::Unchanged
        }
    }
}
