pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod report;
pub mod resolver;
pub mod rewrite;
pub mod targets;
pub mod ui;

pub use error::{Result, SetVersionError};
