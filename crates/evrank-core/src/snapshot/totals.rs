//! Manufacturer totals derived from the ranking lists.

#![allow(clippy::result_large_err)]

use crate::errors::{DeltaError, Result};
use crate::model::{ClassTag, ManufacturerTotals, ManufacturerTotalsTable, ModelEntry, MAX_UNITS};

/// Sum sales per manufacturer across both class lists.
///
/// Manufacturers appear in order of first appearance, BEV list first.
///
/// # Errors
///
/// `MalformedEntity` if a manufacturer's sum exceeds [`MAX_UNITS`].
pub fn derive_manufacturer_totals(
    bev: &[ModelEntry],
    phev: &[ModelEntry],
) -> Result<ManufacturerTotalsTable> {
    let mut table = ManufacturerTotalsTable::new();

    for (class, entries) in [(ClassTag::Bev, bev), (ClassTag::Phev, phev)] {
        for entry in entries {
            let prev = table.get(&entry.manufacturer).copied().unwrap_or_default();
            let (bev_sum, phev_sum) = match class {
                ClassTag::Bev => (prev.bev.checked_add(entry.sales_units), Some(prev.phev)),
                ClassTag::Phev => (Some(prev.bev), prev.phev.checked_add(entry.sales_units)),
            };
            let totals = bev_sum
                .zip(phev_sum)
                .and_then(|(b, p)| ManufacturerTotals::from_classes(b, p))
                .ok_or_else(|| DeltaError::MalformedEntity {
                    key: entry.manufacturer.clone(),
                    reason: format!("derived total exceeds the maximum of {}", MAX_UNITS),
                })?;
            table.insert(entry.manufacturer.clone(), totals);
        }
    }

    Ok(table)
}
