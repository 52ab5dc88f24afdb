//! Report assembler.
//!
//! Purely compositional: counts, stamps, and packages what the engines and
//! the classifier produced. The two "no comparison" states are ordinary
//! reports, not failures.

use crate::alerts::classify;
use crate::config::Thresholds;
use crate::delta::{compute_manufacturer_deltas, compute_model_deltas};
use crate::model::{
    Alert, ClassTag, DeltaReport, ManufacturerDelta, ModelDelta, ReportSummary, Severity, Snapshot,
};
use chrono::{DateTime, Utc};

/// `error` text of the report when no current snapshot exists
pub const NO_CURRENT_ERROR: &str = "Current rankings not found";

/// `message` text of the report when no previous snapshot exists
pub const NO_PREVIOUS_MESSAGE: &str = "No previous data available for comparison";

/// Count alerts and model-delta flags.
pub fn summarize(
    bev: &[ModelDelta],
    phev: &[ModelDelta],
    alerts: &[Alert],
) -> ReportSummary {
    let models = || bev.iter().chain(phev.iter());
    ReportSummary {
        total_alerts: alerts.len(),
        high_severity_alerts: alerts
            .iter()
            .filter(|a| a.severity == Severity::High)
            .count(),
        significant_changes: models().filter(|d| d.is_significant).count(),
        new_entries: models().filter(|d| d.is_new_entry).count(),
    }
}

/// Package a completed comparison.
pub fn assemble(
    current: &Snapshot,
    previous: &Snapshot,
    bev: Vec<ModelDelta>,
    phev: Vec<ModelDelta>,
    manufacturers: Vec<ManufacturerDelta>,
    alerts: Vec<Alert>,
    generated_at: DateTime<Utc>,
) -> DeltaReport {
    let summary = summarize(&bev, &phev, &alerts);
    DeltaReport {
        generated_at,
        current_period: Some(current.period.clone()),
        previous_period: Some(previous.period.clone()),
        has_comparison: true,
        error: None,
        message: None,
        bev_model_deltas: Some(bev),
        phev_model_deltas: Some(phev),
        manufacturer_deltas: Some(manufacturers),
        alerts,
        summary: Some(summary),
    }
}

/// Terminal report when the current snapshot is unavailable.
pub fn no_current_report(generated_at: DateTime<Utc>) -> DeltaReport {
    DeltaReport {
        generated_at,
        current_period: None,
        previous_period: None,
        has_comparison: false,
        error: Some(NO_CURRENT_ERROR.to_string()),
        message: None,
        bev_model_deltas: None,
        phev_model_deltas: None,
        manufacturer_deltas: None,
        alerts: Vec::new(),
        summary: None,
    }
}

/// Terminal report when only the current snapshot is available.
pub fn no_previous_report(current: &Snapshot, generated_at: DateTime<Utc>) -> DeltaReport {
    DeltaReport {
        generated_at,
        current_period: Some(current.period.clone()),
        previous_period: None,
        has_comparison: false,
        error: None,
        message: Some(NO_PREVIOUS_MESSAGE.to_string()),
        bev_model_deltas: None,
        phev_model_deltas: None,
        manufacturer_deltas: None,
        alerts: Vec::new(),
        summary: None,
    }
}

/// Run both delta engines and the classifier, then assemble.
pub fn compare_snapshots(
    current: &Snapshot,
    previous: &Snapshot,
    thresholds: &Thresholds,
    generated_at: DateTime<Utc>,
) -> DeltaReport {
    let bev = compute_model_deltas(
        &current.bev_rankings,
        &previous.bev_rankings,
        ClassTag::Bev,
        thresholds,
    );
    let phev = compute_model_deltas(
        &current.phev_rankings,
        &previous.phev_rankings,
        ClassTag::Phev,
        thresholds,
    );
    let manufacturers = compute_manufacturer_deltas(
        &current.manufacturer_totals,
        &previous.manufacturer_totals,
        thresholds,
    );

    // BEV model alerts, then PHEV model alerts, then manufacturer alerts
    let mut alerts = classify(&bev, &[], thresholds);
    alerts.extend(classify(&phev, &manufacturers, thresholds));

    assemble(current, previous, bev, phev, manufacturers, alerts, generated_at)
}

/// Build the report for whatever inputs are available.
pub fn build_report(
    current: Option<&Snapshot>,
    previous: Option<&Snapshot>,
    thresholds: &Thresholds,
    generated_at: DateTime<Utc>,
) -> DeltaReport {
    match (current, previous) {
        (None, _) => no_current_report(generated_at),
        (Some(current), None) => no_previous_report(current, generated_at),
        (Some(current), Some(previous)) => {
            compare_snapshots(current, previous, thresholds, generated_at)
        }
    }
}
