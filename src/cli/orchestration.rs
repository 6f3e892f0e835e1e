//! Main workflow orchestration logic
//!
//! Resolves the version once, then updates each configured target file
//! independently. Only a failing history query stops the run; every other
//! failure is reported against the file it concerns. Kept separate from `main.rs` so the workflow can be driven
//! programmatically (and in tests) without clap.

use std::path::PathBuf;

use crate::config::{self, Config};
use crate::domain::{BuildCount, VersionTuple};
use crate::error::Result;
use crate::git::{Git2Repository, Repository};
use crate::report::TargetOutcome;
use crate::resolver;
use crate::rewrite;
use crate::targets::{
    DocumentationBadge, ResourceBlock, SourceDeclaration, TargetKind, VersionTarget,
};

/// Arguments for the sync workflow
///
/// Mirrors the CLI Args in a form that does not depend on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SyncWorkflowArgs {
    /// Path to custom config file
    pub config_path: Option<PathBuf>,
}

/// Result of a completed sync run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Commits reported by the history query
    pub commit_count: usize,

    /// Build count derived from the commit count
    pub build: BuildCount,

    /// The version written to every target, if the source declaration yielded one
    pub version: Option<VersionTuple>,

    /// One entry per target file, in processing order
    pub outcomes: Vec<TargetOutcome>,
}

impl WorkflowResult {
    pub fn all_updated(&self) -> bool {
        self.outcomes.iter().all(TargetOutcome::is_success)
    }
}

/// Build the list of targets enabled by the configuration.
///
/// The source declaration always comes first.
pub fn configured_targets(config: &Config) -> Result<Vec<Box<dyn VersionTarget>>> {
    let mut targets: Vec<Box<dyn VersionTarget>> = Vec::new();
    targets.push(Box::new(source_declaration(config)));

    if config.documentation.enabled {
        targets.push(Box::new(DocumentationBadge::new(
            &config.documentation.path,
            &config.documentation.marker,
            &config.documentation.suffix,
        )?));
    }

    if config.resource.enabled {
        targets.push(Box::new(ResourceBlock::new(&config.resource.path)));
    }

    Ok(targets)
}

fn source_declaration(config: &Config) -> SourceDeclaration {
    SourceDeclaration::new(&config.source.path, &config.source.marker)
}

/// Main sync workflow
///
/// 1. Query the commit count (fatal on failure)
/// 2. Resolve the version from the source declaration
/// 3. Rewrite each target; a failing target is recorded and skipped
///
/// When step 2 fails the source file is reported with the reason and every
/// other target is reported as skipped; no file is written.
pub fn run_sync_workflow<R: Repository + ?Sized>(
    repo: &R,
    config: &Config,
) -> Result<WorkflowResult> {
    let commit_count = repo.count_commits()?;
    let build = BuildCount::from_commits(commit_count, config.offset)?;

    let source = source_declaration(config);
    let targets = configured_targets(config)?;

    let (version, outcomes) = match resolver::resolve_file(&source, build) {
        Ok(version) => {
            let outcomes = targets
                .iter()
                .map(|target| update_target(target.as_ref(), &version, config))
                .collect();
            (Some(version), outcomes)
        }
        Err(e) => {
            let reason = e.to_string();
            let skipped = format!(
                "no version could be resolved from {}",
                source.path().display()
            );
            let outcomes = targets
                .iter()
                .map(|target| TargetOutcome {
                    kind: target.kind(),
                    path: target.path().to_path_buf(),
                    result: Err(if target.kind() == TargetKind::Source {
                        reason.clone()
                    } else {
                        skipped.clone()
                    }),
                })
                .collect();
            (None, outcomes)
        }
    };

    Ok(WorkflowResult {
        commit_count,
        build,
        version,
        outcomes,
    })
}

/// Load configuration, open the repository it names and run the workflow.
pub fn run(args: &SyncWorkflowArgs) -> Result<WorkflowResult> {
    let config = config::load_config(args.config_path.as_deref())?;
    let repo = Git2Repository::open(&config.repository.path)?;
    run_sync_workflow(&repo, &config)
}

fn update_target(
    target: &dyn VersionTarget,
    version: &VersionTuple,
    config: &Config,
) -> TargetOutcome {
    TargetOutcome {
        kind: target.kind(),
        path: target.path().to_path_buf(),
        result: rewrite::apply_target(target, version, config.line_ending)
            .map_err(|e| e.to_string()),
    }
}
