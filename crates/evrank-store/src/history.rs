//! Filesystem snapshot source.
//!
//! The current snapshot is a single well-known file. The previous snapshot
//! is chosen from the history directory: file names embed a sortable
//! timestamp, the newest file is the archived copy of the current snapshot,
//! so the second newest is the one to compare against.
//!
//! Absence is reported as `MissingInput` / `InsufficientHistory`, both
//! non-fatal.

#![allow(clippy::result_large_err)]

use crate::errors::{io_error, unusable_snapshot, Result};
use evrank_core::config::StorePaths;
use evrank_core::errors::{DeltaError, ExError};
use evrank_core::model::Snapshot;
use evrank_core::snapshot::parse_snapshot_bytes;
use evrank_core::snapshot_source::SnapshotSource;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Snapshot source over a [`StorePaths`] layout
#[derive(Debug, Clone)]
pub struct FsSnapshotSource {
    paths: StorePaths,
}

impl FsSnapshotSource {
    pub fn new(paths: StorePaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }

    /// History files, newest first
    ///
    /// A missing history directory is treated as empty.
    ///
    /// # Errors
    ///
    /// `Io` if the directory exists but cannot be listed.
    pub fn history_files(&self) -> Result<Vec<PathBuf>> {
        let entries = match fs::read_dir(&self.paths.history_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error("list_history", e)),
        };

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| io_error("list_history", e))?;
            let is_file = entry
                .file_type()
                .map(|t| t.is_file())
                .map_err(|e| io_error("list_history", e))?;
            let matches = entry
                .file_name()
                .to_str()
                .map(|name| self.paths.is_history_file(name))
                .unwrap_or(false);
            if is_file && matches {
                files.push(entry.path());
            }
        }

        files.sort_by(|a, b| b.file_name().cmp(&a.file_name()));
        Ok(files)
    }
}

impl SnapshotSource for FsSnapshotSource {
    fn load_current(&self) -> std::result::Result<Snapshot, ExError> {
        let path = self.paths.current_path();
        match fs::read(&path) {
            Ok(bytes) => read_snapshot(&path, &bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let err: ExError = DeltaError::MissingInput {
                    location: path.display().to_string(),
                }
                .into();
                tracing::warn!(
                    err.code = err.code(),
                    path = %path.display(),
                    "current snapshot not found"
                );
                Err(err)
            }
            Err(e) => Err(io_error("read_current", e)),
        }
    }

    fn load_previous(&self) -> std::result::Result<Snapshot, ExError> {
        let files = self.history_files()?;
        let Some(path) = files.get(1) else {
            let err: ExError = DeltaError::InsufficientHistory { found: files.len() }.into();
            tracing::info!(
                err.code = err.code(),
                found = files.len(),
                history_dir = %self.paths.history_dir.display(),
                "not enough historical data for comparison"
            );
            return Err(err);
        };

        tracing::debug!(path = %path.display(), "selected previous snapshot");
        let bytes = fs::read(path).map_err(|e| io_error("read_previous", e))?;
        read_snapshot(path, &bytes)
    }
}

fn read_snapshot(path: &Path, bytes: &[u8]) -> Result<Snapshot> {
    parse_snapshot_bytes(bytes).map_err(|e| unusable_snapshot(path, e))
}
