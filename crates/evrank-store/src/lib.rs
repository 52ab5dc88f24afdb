//! evrank store - filesystem adapters for snapshot history and delta reports
//!
//! Provides:
//! - `FsSnapshotSource`: current snapshot plus timestamped history lookup
//! - `FsReportSink`: atomic delta document writer
//! - `archive_snapshot`: promotes a snapshot to current and appends it to history

pub mod archive;
pub mod errors;
pub mod fs;
pub mod history;
pub mod sink;

// Re-export key types
pub use archive::{archive_snapshot, ArchiveOutcome};
pub use errors::Result;
pub use history::FsSnapshotSource;
pub use sink::FsReportSink;
