use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use set_version::cli::{self, SyncWorkflowArgs};
use set_version::ui;

#[derive(clap::Parser)]
#[command(
    name = "set-version",
    about = "Synchronize the project version across source, README and resource files"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("set-version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    ui::display_status("Counting commits and resolving version...");

    let workflow_args = SyncWorkflowArgs {
        config_path: args.config,
    };
    let result = match cli::run(&workflow_args) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    match &result.version {
        Some(version) => {
            ui::display_resolved_version(result.commit_count, result.build, version)
        }
        None => ui::display_warning("No version could be resolved; no file was updated"),
    }
    println!();
    for outcome in &result.outcomes {
        ui::display_target_outcome(outcome);
    }
    ui::display_summary(&result.outcomes);

    // Skipped files are reported above; they do not change the exit status.
    Ok(())
}
