//! Per-model delta computation.

use crate::config::Thresholds;
use crate::delta::percent::{percent_change, signed_change};
use crate::model::{ClassTag, EntityKey, ModelDelta, ModelEntry};
use std::collections::HashMap;

/// Compare one class-tagged ranking list against its previous counterpart.
///
/// Output has one delta per entry of `current`, in `current`'s order.
/// Entries only present in `previous` are dropped. If `previous` repeats a
/// key, the last occurrence wins.
pub fn compute_model_deltas(
    current: &[ModelEntry],
    previous: &[ModelEntry],
    class: ClassTag,
    thresholds: &Thresholds,
) -> Vec<ModelDelta> {
    let lookup: HashMap<EntityKey, &ModelEntry> =
        previous.iter().map(|entry| (entry.key(), entry)).collect();

    current
        .iter()
        .map(|entry| match lookup.get(&entry.key()) {
            Some(prev) => matched_delta(entry, prev, class, thresholds),
            None => new_entry_delta(entry, class),
        })
        .collect()
}

/// Significance rule for a model that exists in both snapshots.
///
/// Any one criterion is enough: absolute sales change, absolute rank
/// movement, or absolute percent change (when a percent exists).
pub fn is_model_change_significant(
    sales_change: i64,
    rank_change: i64,
    sales_change_percent: Option<f64>,
    thresholds: &Thresholds,
) -> bool {
    sales_change.unsigned_abs() >= thresholds.significant_sales_change
        || rank_change.unsigned_abs() >= thresholds.significant_rank_change
        || sales_change_percent
            .map(|pct| pct.abs() >= thresholds.significant_growth_percent)
            .unwrap_or(false)
}

fn new_entry_delta(entry: &ModelEntry, class: ClassTag) -> ModelDelta {
    ModelDelta {
        manufacturer: entry.manufacturer.clone(),
        model: entry.model.clone(),
        vehicle_type: class,
        current_rank: entry.rank,
        current_sales: entry.sales_units,
        previous_rank: None,
        previous_sales: None,
        rank_change: None,
        sales_change: None,
        sales_change_percent: None,
        is_new_entry: true,
        is_significant: true,
    }
}

fn matched_delta(
    entry: &ModelEntry,
    prev: &ModelEntry,
    class: ClassTag,
    thresholds: &Thresholds,
) -> ModelDelta {
    // Positive = moved up the ranking
    let rank_change = i64::from(prev.rank) - i64::from(entry.rank);
    let sales_change = signed_change(entry.sales_units, prev.sales_units);
    let sales_change_percent = percent_change(sales_change, prev.sales_units);

    ModelDelta {
        manufacturer: entry.manufacturer.clone(),
        model: entry.model.clone(),
        vehicle_type: class,
        current_rank: entry.rank,
        current_sales: entry.sales_units,
        previous_rank: Some(prev.rank),
        previous_sales: Some(prev.sales_units),
        rank_change: Some(rank_change),
        sales_change: Some(sales_change),
        sales_change_percent,
        is_new_entry: false,
        is_significant: is_model_change_significant(
            sales_change,
            rank_change,
            sales_change_percent,
            thresholds,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_improvement_is_positive() {
        let current = vec![ModelEntry::new("Tesla", "Model 3", 3, 100_000)];
        let previous = vec![ModelEntry::new("Tesla", "Model 3", 7, 100_000)];
        let deltas = compute_model_deltas(
            &current,
            &previous,
            ClassTag::Bev,
            &Thresholds::default(),
        );
        assert_eq!(deltas[0].rank_change, Some(4));
    }

    #[test]
    fn test_last_duplicate_wins_in_lookup() {
        let current = vec![ModelEntry::new("BYD", "Han", 1, 50_000)];
        let previous = vec![
            ModelEntry::new("BYD", "Han", 1, 10_000),
            ModelEntry::new("BYD", "Han", 2, 49_000),
        ];
        let deltas = compute_model_deltas(
            &current,
            &previous,
            ClassTag::Phev,
            &Thresholds::default(),
        );
        assert_eq!(deltas[0].previous_sales, Some(49_000));
    }
}
