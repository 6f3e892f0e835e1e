//! Command-line workflow, independent of argument parsing

pub mod orchestration;

pub use orchestration::{run, run_sync_workflow, SyncWorkflowArgs, WorkflowResult};
