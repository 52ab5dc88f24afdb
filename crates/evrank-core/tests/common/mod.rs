//! Shared fixtures for evrank-core integration tests.

use evrank_core::model::{ManufacturerTotals, ManufacturerTotalsTable, ModelEntry, Snapshot};

/// Build a ranking entry
#[allow(dead_code)]
pub fn entry(manufacturer: &str, model: &str, rank: u32, sales: u64) -> ModelEntry {
    ModelEntry::new(manufacturer, model, rank, sales)
}

/// Build a totals table from `(name, bev, phev)` triples, in the given order
#[allow(dead_code)]
pub fn totals(rows: &[(&str, u64, u64)]) -> ManufacturerTotalsTable {
    rows.iter()
        .map(|(name, bev, phev)| {
            (
                name.to_string(),
                ManufacturerTotals::from_classes(*bev, *phev).unwrap(),
            )
        })
        .collect()
}

/// Build a snapshot with the given period and lists
#[allow(dead_code)]
pub fn snapshot(
    period: &str,
    bev: Vec<ModelEntry>,
    phev: Vec<ModelEntry>,
    manufacturer_totals: ManufacturerTotalsTable,
) -> Snapshot {
    Snapshot {
        period: period.to_string(),
        bev_rankings: bev,
        phev_rankings: phev,
        manufacturer_totals,
    }
}
