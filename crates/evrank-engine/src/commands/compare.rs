//! Comparison orchestration.
//!
//! ## Pipeline (in order):
//! 1. Validate thresholds (hard stop, no reads)
//! 2. Load the current snapshot; absent → "no current" report
//! 3. Load the previous snapshot; absent → "no previous" report
//! 4. Run both delta engines and the classifier, assemble the report
//! 5. Hand the report to the sink
//!
//! Steps 2 and 3 ending early are outcomes, not failures: the terminal
//! report is still written so downstream readers see why nothing changed.

#![allow(clippy::result_large_err)]

use chrono::{DateTime, Utc};
use evrank_core::config::Thresholds;
use evrank_core::errors::{ExError, Result};
use evrank_core::model::DeltaReport;
use evrank_core::report::{build_report, no_current_report};
use evrank_core::report_sink::ReportSink;
use evrank_core::snapshot_source::SnapshotSource;
use evrank_core_types::RunId;
use std::fmt;
use std::time::Instant;

/// How a comparison run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOutcome {
    /// Both snapshots were available and compared
    Compared,
    /// The current snapshot was not found
    NoCurrent,
    /// Fewer than two historical snapshots exist
    NoPrevious,
}

impl ComparisonOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOutcome::Compared => "compared",
            ComparisonOutcome::NoCurrent => "no_current",
            ComparisonOutcome::NoPrevious => "no_previous",
        }
    }
}

impl fmt::Display for ComparisonOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a comparison run
#[derive(Debug, Clone)]
pub struct CompareResult {
    pub run_id: RunId,
    pub outcome: ComparisonOutcome,
    pub report: DeltaReport,
    /// Where the sink put the report
    pub location: String,
}

/// Compare the current snapshot against the previous one and persist the report.
///
/// # Errors
///
/// - `InvalidConfig` if the thresholds are unusable
/// - `Io`, `InvalidSnapshot`, `MalformedEntity` from the source; the
///   non-fatal `MissingInput` and `InsufficientHistory` become outcomes
/// - `Io`, `Serialization` from the sink
///
/// Every error carries the run id.
pub fn run_compare(
    source: &dyn SnapshotSource,
    sink: &dyn ReportSink,
    thresholds: &Thresholds,
    now: DateTime<Utc>,
) -> Result<CompareResult> {
    let run_id = RunId::new();
    let start = Instant::now();
    evrank_core::log_op_start!("compare", run_id = run_id.as_str());

    match compare_inner(source, sink, thresholds, now, &run_id) {
        Ok(result) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            evrank_core::log_op_end!(
                "compare",
                duration_ms = duration_ms,
                run_id = run_id.as_str(),
                outcome = result.outcome.as_str(),
                alerts = result.report.alerts.len()
            );
            Ok(result)
        }
        Err(e) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            let e = e.with_run_id(run_id.clone());
            evrank_core::log_op_error!(
                "compare",
                e.clone(),
                duration_ms = duration_ms,
                run_id = run_id.as_str()
            );
            Err(e)
        }
    }
}

fn compare_inner(
    source: &dyn SnapshotSource,
    sink: &dyn ReportSink,
    thresholds: &Thresholds,
    now: DateTime<Utc>,
    run_id: &RunId,
) -> std::result::Result<CompareResult, ExError> {
    thresholds.validate()?;

    let (outcome, report) = match source.load_current() {
        Err(e) if !e.kind().is_fatal() => {
            log_early_stop(run_id, ComparisonOutcome::NoCurrent, &e);
            (ComparisonOutcome::NoCurrent, no_current_report(now))
        }
        Err(e) => return Err(e),
        Ok(current) => {
            let previous = match source.load_previous() {
                Ok(previous) => Some(previous),
                Err(e) if !e.kind().is_fatal() => {
                    log_early_stop(run_id, ComparisonOutcome::NoPrevious, &e);
                    None
                }
                Err(e) => return Err(e),
            };
            let outcome = if previous.is_some() {
                ComparisonOutcome::Compared
            } else {
                ComparisonOutcome::NoPrevious
            };
            tracing::debug!(
                run_id = run_id.as_str(),
                current_period = %current.period,
                previous_period = previous.as_ref().map(|p| p.period.as_str()),
                "snapshots resolved"
            );
            let report = build_report(Some(&current), previous.as_ref(), thresholds, now);
            (outcome, report)
        }
    };

    let location = sink.save(&report)?;

    Ok(CompareResult {
        run_id: run_id.clone(),
        outcome,
        report,
        location,
    })
}

fn log_early_stop(run_id: &RunId, outcome: ComparisonOutcome, err: &ExError) {
    tracing::info!(
        op = "compare",
        run_id = run_id.as_str(),
        outcome = outcome.as_str(),
        err.kind = ?err.kind(),
        err.code = err.code(),
        "no comparison: {}",
        err.message()
    );
}
