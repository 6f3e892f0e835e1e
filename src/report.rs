use crate::rewrite::RewriteSummary;
use crate::targets::TargetKind;
use std::fmt;
use std::path::PathBuf;

/// Result of updating one target file.
///
/// Failures are kept as text: they are reported and the run moves on to the
/// next file.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetOutcome {
    pub kind: TargetKind,
    pub path: PathBuf,
    pub result: Result<RewriteSummary, String>,
}

impl TargetOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

impl fmt::Display for TargetOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(summary) => {
                let noun = if summary.replaced == 1 { "line" } else { "lines" };
                write!(
                    f,
                    "Updated {} file {} ({} {})",
                    self.kind,
                    self.path.display(),
                    summary.replaced,
                    noun
                )
            }
            Err(reason) => write!(
                f,
                "Skipped {} file {}: {}",
                self.kind,
                self.path.display(),
                reason
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_success_display() {
        let outcome = TargetOutcome {
            kind: TargetKind::Resource,
            path: PathBuf::from("resource.rc"),
            result: Ok(RewriteSummary {
                lines: 30,
                replaced: 4,
            }),
        };
        assert!(outcome.is_success());
        assert_eq!(
            outcome.to_string(),
            "Updated resource file resource.rc (4 lines)"
        );
    }

    #[test]
    fn test_outcome_failure_display() {
        let outcome = TargetOutcome {
            kind: TargetKind::Documentation,
            path: PathBuf::from("README.md"),
            result: Err("I/O error: not found".to_string()),
        };
        assert!(!outcome.is_success());
        let msg = outcome.to_string();
        assert!(msg.starts_with("Skipped documentation file README.md"));
        assert!(msg.contains("not found"));
    }
}
