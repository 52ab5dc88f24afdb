//! Snapshot archive orchestration.

#![allow(clippy::result_large_err)]

use chrono::{DateTime, Utc};
use evrank_core::config::StorePaths;
use evrank_core::errors::Result;
use evrank_core_types::RunId;
use evrank_store::errors::io_error;
use evrank_store::{archive_snapshot, ArchiveOutcome};
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Read a snapshot document from disk and archive it.
///
/// # Errors
///
/// - `Io` if the document cannot be read or written
/// - `InvalidSnapshot` / `MalformedEntity` if it fails validation
pub fn run_archive(
    snapshot_path: &Path,
    paths: &StorePaths,
    now: DateTime<Utc>,
) -> Result<ArchiveOutcome> {
    let run_id = RunId::new();
    let start = Instant::now();
    evrank_core::log_op_start!(
        "archive",
        run_id = run_id.as_str(),
        snapshot = %snapshot_path.display()
    );

    let result = fs::read(snapshot_path)
        .map_err(|e| io_error("read_snapshot", e))
        .and_then(|bytes| archive_snapshot(&bytes, paths, now));

    let duration_ms = start.elapsed().as_millis() as u64;
    match result {
        Ok(outcome) => {
            evrank_core::log_op_end!(
                "archive",
                duration_ms = duration_ms,
                run_id = run_id.as_str(),
                current_period = outcome.period.as_str()
            );
            Ok(outcome)
        }
        Err(e) => {
            let e = e.with_run_id(run_id.clone());
            evrank_core::log_op_error!(
                "archive",
                e.clone(),
                duration_ms = duration_ms,
                run_id = run_id.as_str()
            );
            Err(e)
        }
    }
}
