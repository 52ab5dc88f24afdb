//! Alert classification.
//!
//! Scans model and manufacturer deltas and emits typed, severity-ranked
//! alerts. Each delta is evaluated on its own; a model delta yields zero,
//! one, or two alerts (rank and sales are independent triggers) and a
//! manufacturer delta yields zero or one.

pub mod classifier;
pub mod format;

pub use classifier::{classify, classify_manufacturer, classify_model};
