//! Console summary renderer for delta reports.

use crate::model::DeltaReport;

/// Render the plain-text summary printed after a comparison.
///
/// At most `alert_limit` alerts are listed; the remainder is reported as a
/// count. Informational only; the structured report is unaffected.
pub fn render_console_summary(report: &DeltaReport, alert_limit: usize) -> String {
    let mut out = String::new();

    if !report.has_comparison {
        let reason = report
            .error
            .as_deref()
            .or(report.message.as_deref())
            .unwrap_or("no comparison available");
        out.push_str(&format!("No comparison: {}\n", reason));
        if let Some(period) = &report.current_period {
            out.push_str(&format!("  Current period: {}\n", period));
        }
        return out;
    }

    out.push_str(&format!(
        "Comparison: {} → {}\n",
        report.previous_period.as_deref().unwrap_or("?"),
        report.current_period.as_deref().unwrap_or("?")
    ));
    if let Some(summary) = &report.summary {
        out.push_str(&format!(
            "  Significant changes: {}\n",
            summary.significant_changes
        ));
        out.push_str(&format!("  Total alerts: {}\n", summary.total_alerts));
    }

    if report.alerts.is_empty() {
        return out;
    }

    out.push_str("\nAlerts:\n");
    for alert in report.alerts.iter().take(alert_limit) {
        out.push_str(&format!(
            "  [{}] {}\n",
            alert.severity.as_str().to_uppercase(),
            alert.message
        ));
    }
    if report.alerts.len() > alert_limit {
        out.push_str(&format!(
            "  ... and {} more\n",
            report.alerts.len() - alert_limit
        ));
    }

    out
}
