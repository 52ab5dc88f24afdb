//! Filesystem report sink.

#![allow(clippy::result_large_err)]

use crate::errors::serialization_error;
use crate::fs::atomic_write;
use evrank_core::config::StorePaths;
use evrank_core::errors::ExError;
use evrank_core::model::DeltaReport;
use evrank_core::report_sink::ReportSink;
use std::path::{Path, PathBuf};

/// Writes the delta document as pretty JSON to `{data_dir}/{delta_file}`
#[derive(Debug, Clone)]
pub struct FsReportSink {
    target: PathBuf,
}

impl FsReportSink {
    pub fn new(paths: &StorePaths) -> Self {
        Self {
            target: paths.delta_path(),
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }
}

impl ReportSink for FsReportSink {
    fn save(&self, report: &DeltaReport) -> Result<String, ExError> {
        let json =
            serde_json::to_vec_pretty(report).map_err(|e| serialization_error("save_report", e))?;
        atomic_write(&self.target, &json)?;

        tracing::debug!(path = %self.target.display(), bytes = json.len(), "delta report written");
        Ok(self.target.display().to_string())
    }
}
