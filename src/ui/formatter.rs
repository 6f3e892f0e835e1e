//! Formatting functions for terminal output.
//!
//! All diagnostics of a run go through here so colors and prefixes stay
//! consistent.

use console::style;

use crate::domain::{BuildCount, VersionTuple};
use crate::report::TargetOutcome;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Format and print a non-fatal warning.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("WARNING:").yellow().bold(), message);
}

/// Display the commit count and the version derived from it.
pub fn display_resolved_version(commit_count: usize, build: BuildCount, version: &VersionTuple) {
    println!(
        "\n{}",
        style(format!("Resolved version {}", version)).bold()
    );
    println!("  Commits: {}", commit_count);
    println!("  Build:   {}", style(build).green());
}

/// Display one target's outcome: success in green, failure as a warning.
pub fn display_target_outcome(outcome: &TargetOutcome) {
    if outcome.is_success() {
        display_success(&outcome.to_string());
    } else {
        display_warning(&outcome.to_string());
    }
}

/// Format the closing summary line of a run.
pub fn format_summary(outcomes: &[TargetOutcome]) -> String {
    let updated = outcomes.iter().filter(|o| o.is_success()).count();
    let skipped = outcomes.len() - updated;
    if skipped == 0 {
        format!("{} of {} files updated", updated, outcomes.len())
    } else {
        format!(
            "{} of {} files updated, {} skipped",
            updated,
            outcomes.len(),
            skipped
        )
    }
}

/// Print the closing summary line of a run.
pub fn display_summary(outcomes: &[TargetOutcome]) {
    println!("\n{}", style(format_summary(outcomes)).bold());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::RewriteSummary;
    use crate::targets::TargetKind;
    use std::path::PathBuf;

    fn outcome(ok: bool) -> TargetOutcome {
        TargetOutcome {
            kind: TargetKind::Source,
            path: PathBuf::from("main.cpp"),
            result: if ok {
                Ok(RewriteSummary {
                    lines: 10,
                    replaced: 1,
                })
            } else {
                Err("boom".to_string())
            },
        }
    }

    #[test]
    fn test_format_summary_all_updated() {
        assert_eq!(
            format_summary(&[outcome(true), outcome(true)]),
            "2 of 2 files updated"
        );
    }

    #[test]
    fn test_format_summary_with_skips() {
        assert_eq!(
            format_summary(&[outcome(true), outcome(false), outcome(true)]),
            "2 of 3 files updated, 1 skipped"
        );
    }
}
