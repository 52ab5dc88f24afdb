//! Snapshot archiver.
//!
//! Promotes a freshly produced snapshot document to the current slot and
//! appends a timestamped copy to the history directory. This is the only
//! writer of history files.

#![allow(clippy::result_large_err)]

use crate::errors::{serialization_error, Result};
use crate::fs::atomic_write;
use chrono::{DateTime, Utc};
use evrank_core::config::StorePaths;
use evrank_core::errors::{DeltaError, ExError, ExErrorKind};
use evrank_core::snapshot::{derive_manufacturer_totals, parse_snapshot_value};
use serde_json::Value;
use std::path::PathBuf;

/// Timestamp format embedded in history file names
pub const HISTORY_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Where an archived snapshot ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveOutcome {
    pub period: String,
    pub current_path: PathBuf,
    pub history_path: PathBuf,
    /// True when `manufacturer_totals` was absent and derived from the rankings
    pub derived_totals: bool,
}

/// Validate a snapshot document and write it as current and into history.
///
/// The document is stored as given apart from a derived
/// `manufacturer_totals` table when the source omitted one. Other fields are
/// kept untouched.
///
/// # Errors
///
/// - `InvalidSnapshot` / `MalformedEntity` if the document fails validation
///   or its derived totals overflow (nothing is written)
/// - `Io` if a history file with the same one-second stamp already exists
///   (nothing is written)
/// - `Serialization` or `Io` if either file cannot be written
pub fn archive_snapshot(
    bytes: &[u8],
    paths: &StorePaths,
    now: DateTime<Utc>,
) -> Result<ArchiveOutcome> {
    // 1. Parse to a generic document
    let mut raw: Value = serde_json::from_slice(bytes).map_err(|e| DeltaError::InvalidSnapshot {
        reason: format!("snapshot is not valid JSON: {}", e),
    })?;

    // 2. Validate
    let snapshot = parse_snapshot_value(&raw)?;

    // 3. Fill in totals when the producer did not supply them
    let mut derived_totals = false;
    if let Some(obj) = raw.as_object_mut() {
        let missing = matches!(obj.get("manufacturer_totals"), None | Some(Value::Null));
        if missing {
            let table =
                derive_manufacturer_totals(&snapshot.bev_rankings, &snapshot.phev_rankings)?;
            let value = serde_json::to_value(&table)
                .map_err(|e| serialization_error("archive_snapshot", e))?;
            obj.insert("manufacturer_totals".to_string(), value);
            derived_totals = true;
        }
    }

    // 4. Write current, then history
    let json =
        serde_json::to_vec_pretty(&raw).map_err(|e| serialization_error("archive_snapshot", e))?;
    let current_path = paths.current_path();
    let history_path = paths.history_path(&now.format(HISTORY_STAMP_FORMAT).to_string());
    if history_path.exists() {
        return Err(ExError::new(ExErrorKind::Io)
            .with_op("archive_snapshot")
            .with_message(format!(
                "history file {} already exists; archives are one per second",
                history_path.display()
            )));
    }

    atomic_write(&current_path, &json)?;
    atomic_write(&history_path, &json)?;

    tracing::info!(
        period = %snapshot.period,
        current = %current_path.display(),
        history = %history_path.display(),
        derived_totals,
        "snapshot archived"
    );

    Ok(ArchiveOutcome {
        period: snapshot.period,
        current_path,
        history_path,
        derived_totals,
    })
}
