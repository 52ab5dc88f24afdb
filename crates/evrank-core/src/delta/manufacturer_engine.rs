//! Per-manufacturer aggregate delta computation.

use crate::config::Thresholds;
use crate::delta::percent::{percent_change, signed_change};
use crate::model::{ManufacturerDelta, ManufacturerTotalsTable};

/// Compare manufacturer totals over the union of both snapshots' keys.
///
/// A side that lacks a manufacturer counts as all-zero totals. Iteration
/// order is current keys in document order followed by previous-only keys
/// in document order; the result is then stable-sorted by current grand
/// total, descending, so ties keep that order.
pub fn compute_manufacturer_deltas(
    current: &ManufacturerTotalsTable,
    previous: &ManufacturerTotalsTable,
    thresholds: &Thresholds,
) -> Vec<ManufacturerDelta> {
    let names = current.iter().map(|(name, _)| name).chain(
        previous
            .iter()
            .map(|(name, _)| name)
            .filter(|name| !current.contains(name)),
    );

    let mut deltas: Vec<ManufacturerDelta> = names
        .map(|name| {
            let curr = current.get(name).copied().unwrap_or_default();
            let prev = previous.get(name).copied().unwrap_or_default();
            let total_change = signed_change(curr.total, prev.total);

            ManufacturerDelta {
                manufacturer: name.to_string(),
                current_total: curr.total,
                previous_total: prev.total,
                total_change,
                current_bev: curr.bev,
                previous_bev: prev.bev,
                bev_change: signed_change(curr.bev, prev.bev),
                current_phev: curr.phev,
                previous_phev: prev.phev,
                phev_change: signed_change(curr.phev, prev.phev),
                is_new: !previous.contains(name),
                is_significant: total_change.unsigned_abs()
                    >= thresholds.significant_sales_change,
                total_change_percent: percent_change(total_change, prev.total),
            }
        })
        .collect();

    // sort_by is stable
    deltas.sort_by(|a, b| b.current_total.cmp(&a.current_total));
    deltas
}
