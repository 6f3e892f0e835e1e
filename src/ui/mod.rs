//! User interface module - terminal output for a version sync run.
//!
//! The tool never prompts; everything here is reporting.

pub mod formatter;

pub use formatter::{
    display_error, display_resolved_version, display_status, display_success, display_summary,
    display_target_outcome, display_warning, format_summary,
};
