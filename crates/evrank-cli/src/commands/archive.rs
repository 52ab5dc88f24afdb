//! Archive command

use crate::commands::StoreArgs;
use chrono::Utc;
use clap::Args;
use evrank_core::errors::{ExError, ExErrorKind};
use evrank_engine::{apply_engine_command, EngineCommand, EngineCommandResult};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ArchiveArgs {
    /// Snapshot document to archive
    #[arg(long)]
    pub snapshot: PathBuf,

    #[command(flatten)]
    pub store: StoreArgs,
}

pub fn execute(args: ArchiveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.store.load_config()?;

    let cmd = EngineCommand::Archive {
        snapshot: args.snapshot,
        paths: config.paths,
    };
    let outcome = match apply_engine_command(cmd, Utc::now())? {
        EngineCommandResult::Archive(o) => o,
        EngineCommandResult::Compare(_) => {
            return Err(ExError::new(ExErrorKind::Internal)
                .with_op("archive")
                .with_message("engine returned a compare result for an archive command")
                .into())
        }
    };

    println!("Snapshot archived:");
    println!("  period: {}", outcome.period);
    println!("  current: {}", outcome.current_path.display());
    println!("  history: {}", outcome.history_path.display());
    if outcome.derived_totals {
        println!("  (manufacturer totals derived from rankings)");
    }

    Ok(())
}
