//! Report sink interface: where finished delta reports go.

use crate::errors::ExError;
use crate::model::DeltaReport;
use std::cell::RefCell;

/// Persist a finished report and say where it went.
///
/// Implementations that write files must replace the target atomically so
/// downstream readers never observe a partial document.
#[allow(clippy::result_large_err)]
pub trait ReportSink {
    /// Persist the report, returning a human-readable location.
    ///
    /// # Errors
    ///
    /// `Io` or `Serialization` if the report cannot be written.
    fn save(&self, report: &DeltaReport) -> Result<String, ExError>;
}

/// Sink that keeps reports in memory.
#[derive(Debug, Default)]
pub struct MemoryReportSink {
    saved: RefCell<Vec<DeltaReport>>,
}

impl MemoryReportSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports saved so far, oldest first
    pub fn saved(&self) -> Vec<DeltaReport> {
        self.saved.borrow().clone()
    }
}

impl ReportSink for MemoryReportSink {
    #[allow(clippy::result_large_err)]
    fn save(&self, report: &DeltaReport) -> Result<String, ExError> {
        self.saved.borrow_mut().push(report.clone());
        Ok(format!("memory:{}", self.saved.borrow().len() - 1))
    }
}
