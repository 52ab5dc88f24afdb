//! evrank core - ranking snapshot comparison kernel
//!
//! This crate holds the decision logic of the rankings delta calculator:
//! - Snapshot model and document validation
//! - Per-model and per-manufacturer delta engines
//! - Alert classification with severity assignment
//! - Report assembly and the console summary
//! - The source/sink seams the store crate implements
//!
//! Everything here is synchronous and free of I/O apart from reading an
//! optional configuration file.

pub mod alerts;
pub mod config;
pub mod delta;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod report;
pub mod report_sink;
pub mod snapshot;
pub mod snapshot_source;

pub use evrank_core_types::schema;

// Re-export commonly used types
pub use config::{DeltaConfig, StorePaths, Thresholds};
pub use errors::{DeltaError, ExError, ExErrorKind, Result};
pub use model::{
    Alert, AlertType, ClassTag, DeltaReport, ManufacturerDelta, ModelDelta, ModelEntry, Severity,
    Snapshot,
};
pub use report::build_report;
pub use report_sink::ReportSink;
pub use snapshot_source::SnapshotSource;
