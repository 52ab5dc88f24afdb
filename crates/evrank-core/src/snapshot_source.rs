//! Snapshot source interface: where the current and previous snapshots come from.

use crate::errors::{DeltaError, ExError};
use crate::model::Snapshot;

/// Resolve the two snapshots a comparison needs.
///
/// A snapshot that is simply not there is reported with a non-fatal kind
/// (`MissingInput`, `InsufficientHistory`; see [`ExErrorKind::is_fatal`]) and
/// leads to a no-comparison report. Every other kind aborts the run.
///
/// [`ExErrorKind::is_fatal`]: crate::errors::ExErrorKind::is_fatal
#[allow(clippy::result_large_err)]
pub trait SnapshotSource {
    /// Load the current snapshot.
    ///
    /// # Errors
    ///
    /// - `MissingInput` when there is no current snapshot
    /// - `Io`, `InvalidSnapshot`, or `MalformedEntity` when the document exists but is unusable
    fn load_current(&self) -> Result<Snapshot, ExError>;

    /// Load the snapshot to compare against.
    ///
    /// # Errors
    ///
    /// - `InsufficientHistory` when no earlier snapshot exists
    /// - `Io`, `InvalidSnapshot`, or `MalformedEntity` when the document exists but is unusable
    fn load_previous(&self) -> Result<Snapshot, ExError>;
}

/// In-memory source holding already-parsed snapshots.
#[derive(Debug, Clone, Default)]
pub struct StaticSnapshotSource {
    pub current: Option<Snapshot>,
    pub previous: Option<Snapshot>,
}

impl StaticSnapshotSource {
    pub fn new(current: Option<Snapshot>, previous: Option<Snapshot>) -> Self {
        Self { current, previous }
    }
}

impl SnapshotSource for StaticSnapshotSource {
    #[allow(clippy::result_large_err)]
    fn load_current(&self) -> Result<Snapshot, ExError> {
        self.current.clone().ok_or_else(|| {
            DeltaError::MissingInput {
                location: "memory".to_string(),
            }
            .into()
        })
    }

    #[allow(clippy::result_large_err)]
    fn load_previous(&self) -> Result<Snapshot, ExError> {
        self.previous.clone().ok_or_else(|| {
            DeltaError::InsufficientHistory {
                found: usize::from(self.current.is_some()),
            }
            .into()
        })
    }
}
