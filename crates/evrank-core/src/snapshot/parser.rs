//! Snapshot document parser.
//!
//! Descriptive fields beyond the ones the comparison needs (revenue,
//! regional splits, market statistics) are ignored.

#![allow(clippy::result_large_err)]

use crate::errors::{DeltaError, Result};
use crate::model::{
    ClassTag, ManufacturerTotals, ManufacturerTotalsTable, ModelEntry, Snapshot, MAX_UNITS,
};
use serde_json::{Map, Value};

/// Parse raw snapshot bytes into a validated [`Snapshot`].
///
/// # Errors
///
/// - `InvalidSnapshot`: bytes are not UTF-8 JSON, the root is not an object,
///   `period` is missing, or a collection field has the wrong JSON type
/// - `MalformedEntity`: a ranking or totals record is missing a required
///   field or carries an out-of-range value
pub fn parse_snapshot_bytes(bytes: &[u8]) -> Result<Snapshot> {
    // 1. UTF-8 decode
    let text = std::str::from_utf8(bytes).map_err(|e| DeltaError::InvalidSnapshot {
        reason: format!("snapshot is not valid UTF-8: {}", e),
    })?;

    // 2. JSON parse to generic Value
    let raw: Value = serde_json::from_str(text).map_err(|e| DeltaError::InvalidSnapshot {
        reason: format!("snapshot is not valid JSON: {}", e),
    })?;

    parse_snapshot_value(&raw)
}

/// Validate an already-parsed JSON document.
///
/// # Errors
///
/// Same as [`parse_snapshot_bytes`], minus the decoding failures.
pub fn parse_snapshot_value(raw: &Value) -> Result<Snapshot> {
    let obj = raw.as_object().ok_or_else(|| DeltaError::InvalidSnapshot {
        reason: "snapshot JSON root must be an object".to_string(),
    })?;

    let period = obj
        .get("period")
        .and_then(Value::as_str)
        .ok_or_else(|| DeltaError::InvalidSnapshot {
            reason: "required field `period` is absent or not a string".to_string(),
        })?
        .to_string();

    let bev_rankings = parse_rankings(obj, ClassTag::Bev)?;
    let phev_rankings = parse_rankings(obj, ClassTag::Phev)?;
    let manufacturer_totals = parse_totals(obj)?;

    Ok(Snapshot {
        period,
        bev_rankings,
        phev_rankings,
        manufacturer_totals,
    })
}

/// Parse one class-tagged ranking list. An absent list is empty.
fn parse_rankings(
    obj: &Map<String, Value>,
    class: ClassTag,
) -> std::result::Result<Vec<ModelEntry>, DeltaError> {
    let field = class.rankings_field();
    let items = match obj.get(field) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(DeltaError::InvalidSnapshot {
                reason: format!("`{}` must be an array", field),
            })
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| parse_model_entry(item, class, idx))
        .collect()
}

fn parse_model_entry(
    item: &Value,
    class: ClassTag,
    idx: usize,
) -> std::result::Result<ModelEntry, DeltaError> {
    let positional = format!("{}[{}]", class, idx);
    let record = item.as_object().ok_or_else(|| DeltaError::MalformedEntity {
        key: positional.clone(),
        reason: "ranking record must be an object".to_string(),
    })?;

    let manufacturer = require_str(record, "manufacturer", &positional)?;
    let model = require_str(record, "model", &positional)?;
    let key = format!("{}: {} {}", class, manufacturer, model);

    let rank = require_uint(record, "rank", &key)?;
    if rank == 0 {
        return Err(DeltaError::MalformedEntity {
            key,
            reason: "`rank` must be >= 1".to_string(),
        });
    }
    let rank = u32::try_from(rank).map_err(|_| DeltaError::MalformedEntity {
        key: key.clone(),
        reason: format!("`rank` {} is out of range", rank),
    })?;
    let sales_units = require_uint(record, "sales_units", &key)?;

    Ok(ModelEntry::new(manufacturer, model, rank, sales_units))
}

/// Parse `manufacturer_totals`. An absent table is empty.
fn parse_totals(
    obj: &Map<String, Value>,
) -> std::result::Result<ManufacturerTotalsTable, DeltaError> {
    let entries = match obj.get("manufacturer_totals") {
        None | Some(Value::Null) => return Ok(ManufacturerTotalsTable::new()),
        Some(Value::Object(entries)) => entries,
        Some(_) => {
            return Err(DeltaError::InvalidSnapshot {
                reason: "`manufacturer_totals` must be an object".to_string(),
            })
        }
    };

    let mut table = ManufacturerTotalsTable::new();
    for (name, value) in entries {
        let record = value.as_object().ok_or_else(|| DeltaError::MalformedEntity {
            key: name.clone(),
            reason: "totals record must be an object".to_string(),
        })?;
        let bev = require_uint(record, "bev", name)?;
        let phev = require_uint(record, "phev", name)?;
        let total = require_uint(record, "total", name)?;

        if bev.checked_add(phev) != Some(total) {
            return Err(DeltaError::MalformedEntity {
                key: name.clone(),
                reason: format!("`total` {} does not equal bev {} + phev {}", total, bev, phev),
            });
        }
        table.insert(name.clone(), ManufacturerTotals { bev, phev, total });
    }
    Ok(table)
}

fn require_str<'a>(
    record: &'a Map<String, Value>,
    field: &str,
    key: &str,
) -> std::result::Result<&'a str, DeltaError> {
    record
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| DeltaError::MalformedEntity {
            key: key.to_string(),
            reason: format!("required string field `{}` is absent", field),
        })
}

fn require_uint(
    record: &Map<String, Value>,
    field: &str,
    key: &str,
) -> std::result::Result<u64, DeltaError> {
    let malformed = |reason: String| DeltaError::MalformedEntity {
        key: key.to_string(),
        reason,
    };
    match record.get(field) {
        None | Some(Value::Null) => Err(malformed(format!(
            "required field `{}` is absent",
            field
        ))),
        Some(v) => {
            if let Some(n) = v.as_u64() {
                if n > MAX_UNITS {
                    return Err(malformed(format!(
                        "`{}` {} exceeds the maximum of {}",
                        field, n, MAX_UNITS
                    )));
                }
                Ok(n)
            } else if v.as_i64().is_some() {
                Err(malformed(format!("`{}` must be >= 0, got {}", field, v)))
            } else {
                Err(malformed(format!(
                    "`{}` must be a non-negative integer, got {}",
                    field, v
                )))
            }
        }
    }
}
