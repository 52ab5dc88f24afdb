//! Per-delta alert decision rules.

use crate::alerts::format::{group_thousands, percent_suffix};
use crate::config::Thresholds;
use crate::model::{Alert, AlertType, ManufacturerDelta, ModelDelta, Severity};

/// Classify every delta.
///
/// Ordering: all model alerts in the order the model deltas are given,
/// then all manufacturer alerts in the order the manufacturer deltas are
/// given.
pub fn classify(
    model_deltas: &[ModelDelta],
    manufacturer_deltas: &[ManufacturerDelta],
    thresholds: &Thresholds,
) -> Vec<Alert> {
    let model_alerts = model_deltas
        .iter()
        .flat_map(|delta| classify_model(delta, thresholds));
    let manufacturer_alerts = manufacturer_deltas
        .iter()
        .filter_map(classify_manufacturer);
    model_alerts.chain(manufacturer_alerts).collect()
}

/// Alerts for a single model delta (0, 1, or 2).
pub fn classify_model(delta: &ModelDelta, thresholds: &Thresholds) -> Vec<Alert> {
    let mut alerts = Vec::new();
    let name = format!("{} {}", delta.manufacturer, delta.model);

    if delta.is_new_entry {
        alerts.push(Alert::new(
            AlertType::NewEntry,
            Severity::Info,
            format!(
                "New entry: {} ({}) at rank #{} with {} units",
                name,
                delta.vehicle_type,
                delta.current_rank,
                group_thousands(delta.current_sales)
            ),
        ));
    } else if let Some(rank_change) = delta.rank_change {
        if rank_change.unsigned_abs() >= thresholds.significant_rank_change {
            let direction = if rank_change > 0 { "up" } else { "down" };
            alerts.push(Alert::new(
                AlertType::RankChange,
                Severity::Medium,
                format!(
                    "{} moved {} {} positions to rank #{}",
                    name,
                    direction,
                    rank_change.unsigned_abs(),
                    delta.current_rank
                ),
            ));
        }
    }

    if let Some(sales_change) = delta.sales_change {
        let magnitude = sales_change.unsigned_abs();
        if magnitude >= thresholds.significant_sales_change {
            let direction = if sales_change > 0 {
                "increased"
            } else {
                "decreased"
            };
            let severity = if magnitude > thresholds.high_severity_sales_change {
                Severity::High
            } else {
                Severity::Medium
            };
            alerts.push(Alert::new(
                AlertType::SalesChange,
                severity,
                format!(
                    "{} sales {} by {} units{}",
                    name,
                    direction,
                    group_thousands(magnitude),
                    percent_suffix(delta.sales_change_percent)
                ),
            ));
        }
    }

    alerts
}

/// Alert for a single manufacturer delta, if any.
pub fn classify_manufacturer(delta: &ManufacturerDelta) -> Option<Alert> {
    if delta.is_new {
        return Some(Alert::new(
            AlertType::NewManufacturer,
            Severity::Info,
            format!(
                "New manufacturer: {} with {} total units",
                delta.manufacturer,
                group_thousands(delta.current_total)
            ),
        ));
    }
    if !delta.is_significant {
        return None;
    }

    let direction = if delta.total_change > 0 {
        "increased"
    } else {
        "decreased"
    };
    Some(Alert::new(
        AlertType::ManufacturerChange,
        Severity::High,
        format!(
            "{} total sales {} by {} units{}",
            delta.manufacturer,
            direction,
            group_thousands(delta.total_change.unsigned_abs()),
            percent_suffix(delta.total_change_percent)
        ),
    ))
}
