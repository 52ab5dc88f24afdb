//! Engine-level commands over the filesystem layout.

#![allow(clippy::result_large_err)]

use crate::commands::archive::run_archive;
use crate::commands::compare::{run_compare, CompareResult};
use chrono::{DateTime, Utc};
use evrank_core::config::{StorePaths, Thresholds};
use evrank_core::errors::Result;
use evrank_store::{ArchiveOutcome, FsReportSink, FsSnapshotSource};
use std::path::PathBuf;

/// Engine-level commands that touch the snapshot store.
#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// Compare current against previous and write the delta document.
    Compare {
        paths: StorePaths,
        thresholds: Thresholds,
    },
    /// Promote a snapshot document to current and append it to history.
    Archive { snapshot: PathBuf, paths: StorePaths },
}

/// Result of applying an engine command.
#[derive(Debug, Clone)]
pub enum EngineCommandResult {
    Compare(CompareResult),
    Archive(ArchiveOutcome),
}

/// Apply an engine command against the filesystem adapters.
///
/// # Errors
///
/// Whatever the dispatched command returns; see [`run_compare`] and [`run_archive`].
pub fn apply_engine_command(
    cmd: EngineCommand,
    now: DateTime<Utc>,
) -> Result<EngineCommandResult> {
    match cmd {
        EngineCommand::Compare { paths, thresholds } => {
            let source = FsSnapshotSource::new(paths.clone());
            let sink = FsReportSink::new(&paths);
            run_compare(&source, &sink, &thresholds, now).map(EngineCommandResult::Compare)
        }
        EngineCommand::Archive { snapshot, paths } => {
            run_archive(&snapshot, &paths, now).map(EngineCommandResult::Archive)
        }
    }
}
