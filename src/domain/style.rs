use crate::domain::version::VersionTuple;

/// How the fourth component of a rendered version is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraForm {
    /// The declaration field exactly as written, quotes included
    Verbatim,
    /// The label with surrounding quotes removed
    Label,
    /// The label collapsed to `alpha` / `beta` when it contains either
    Simplified,
}

/// Delimiter configuration controlling how a [`VersionTuple`] becomes text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    pub delimiter: &'static str,
    /// `None` drops the extra label entirely and emits a trailing `0`
    pub extra_delimiter: Option<&'static str>,
    pub extra: ExtraForm,
}

impl RenderStyle {
    /// `1, 7, 0, "beta"` - the source declaration field list
    pub const DECLARATION: RenderStyle = RenderStyle {
        delimiter: ", ",
        extra_delimiter: Some(", "),
        extra: ExtraForm::Verbatim,
    };

    /// `1.7.0-beta` - documentation badges
    pub const BADGE: RenderStyle = RenderStyle {
        delimiter: ".",
        extra_delimiter: Some("-"),
        extra: ExtraForm::Simplified,
    };

    /// `1.7.0-beta` - `FileVersion` / `ProductVersion` resource strings
    pub const RESOURCE_STRING: RenderStyle = RenderStyle {
        delimiter: ".",
        extra_delimiter: Some("-"),
        extra: ExtraForm::Simplified,
    };

    /// `1,7,0,0` - numeric `FILEVERSION` / `PRODUCTVERSION` fields
    pub const RESOURCE_NUMERIC: RenderStyle = RenderStyle {
        delimiter: ",",
        extra_delimiter: None,
        extra: ExtraForm::Label,
    };

    /// `1.7.0-beta-candidate-3` - human readable output
    pub const DOTTED: RenderStyle = RenderStyle {
        delimiter: ".",
        extra_delimiter: Some("-"),
        extra: ExtraForm::Label,
    };

    /// Render a version tuple.
    ///
    /// Without an extra label (or without an extra delimiter) the fourth slot
    /// is filled with `0`, for formats that need four fields. The verbatim form
    /// always re-emits the declaration field as written.
    pub fn render(&self, version: &VersionTuple) -> String {
        let d = self.delimiter;
        let head = format!("{}{d}{}{d}{}", version.major, version.minor, version.patch);

        match (self.extra_delimiter, self.extra) {
            (Some(ed), ExtraForm::Verbatim) => format!("{head}{ed}{}", version.extra.trim()),
            (Some(ed), form) if version.has_extra() => {
                let label = match form {
                    ExtraForm::Simplified => simplify_extra(version.label()),
                    _ => version.label(),
                };
                format!("{head}{ed}{label}")
            }
            _ => format!("{head}{d}0"),
        }
    }
}

/// Collapse pre-release labels for public facing output.
///
/// Any label mentioning "alpha" becomes `alpha`, any mentioning "beta" becomes
/// `beta` (case-insensitive); everything else is returned unchanged.
pub fn simplify_extra(label: &str) -> &str {
    let lower = label.to_lowercase();
    if lower.contains("alpha") {
        "alpha"
    } else if lower.contains("beta") {
        "beta"
    } else {
        label
    }
}
