//! Snapshot documents.
//!
//! Turns raw snapshot JSON into a validated [`Snapshot`](crate::model::Snapshot),
//! rejecting malformed records instead of coercing them, and derives
//! manufacturer totals for documents that omit them.
//!
//! ## Entry point
//!
//! ```ignore
//! use evrank_core::snapshot::parse_snapshot_bytes;
//!
//! let snapshot = parse_snapshot_bytes(&bytes)?;
//! ```

pub mod parser;
pub mod totals;

pub use parser::{parse_snapshot_bytes, parse_snapshot_value};
pub use totals::derive_manufacturer_totals;
