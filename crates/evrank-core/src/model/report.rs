//! The delta document: root output of one comparison.

use crate::model::alert::Alert;
use crate::model::delta::{ManufacturerDelta, ModelDelta};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Counters summarising a completed comparison
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportSummary {
    pub total_alerts: usize,
    pub high_severity_alerts: usize,
    /// Model deltas flagged significant (BEV + PHEV)
    pub significant_changes: usize,
    /// Model deltas that are new entries (BEV + PHEV)
    pub new_entries: usize,
}

/// The comparison report written by the sink.
///
/// When `has_comparison` is false the delta collections and summary are
/// omitted and `error` or `message` explains why.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeltaReport {
    pub generated_at: DateTime<Utc>,
    pub current_period: Option<String>,
    pub previous_period: Option<String>,
    pub has_comparison: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bev_model_deltas: Option<Vec<ModelDelta>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phev_model_deltas: Option<Vec<ModelDelta>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer_deltas: Option<Vec<ManufacturerDelta>>,
    pub alerts: Vec<Alert>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<ReportSummary>,
}

impl DeltaReport {
    /// All model deltas, BEV first then PHEV
    pub fn model_deltas(&self) -> impl Iterator<Item = &ModelDelta> {
        self.bev_model_deltas
            .iter()
            .flatten()
            .chain(self.phev_model_deltas.iter().flatten())
    }
}
