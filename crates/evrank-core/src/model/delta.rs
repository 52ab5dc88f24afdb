//! Delta output records.
//!
//! Field names match the delta document consumed downstream; optional
//! fields serialize as `null`.

use crate::model::snapshot::ClassTag;
use serde::{Deserialize, Serialize};

/// Change record for one model present in the current ranking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelDelta {
    pub manufacturer: String,
    pub model: String,
    pub vehicle_type: ClassTag,
    pub current_rank: u32,
    pub current_sales: u64,
    /// Absent when the model is a new entry
    pub previous_rank: Option<u32>,
    pub previous_sales: Option<u64>,
    /// `previous_rank - current_rank`; positive means the model moved up
    pub rank_change: Option<i64>,
    /// `current_sales - previous_sales`
    pub sales_change: Option<i64>,
    /// Absent when previous sales were zero or the model is new
    pub sales_change_percent: Option<f64>,
    pub is_new_entry: bool,
    pub is_significant: bool,
}

/// Change record for one manufacturer's aggregate totals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManufacturerDelta {
    pub manufacturer: String,
    pub current_total: u64,
    pub previous_total: u64,
    pub total_change: i64,
    pub current_bev: u64,
    pub previous_bev: u64,
    pub bev_change: i64,
    pub current_phev: u64,
    pub previous_phev: u64,
    pub phev_change: i64,
    /// True iff the manufacturer did not appear in the previous totals
    pub is_new: bool,
    pub is_significant: bool,
    /// Absent when the previous grand total was zero
    pub total_change_percent: Option<f64>,
}
