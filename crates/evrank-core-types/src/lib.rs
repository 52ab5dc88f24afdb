//! Core types shared across the evrank crates
//!
//! This crate holds the small set of types used by both the error and
//! logging facilities:
//!
//! - **Correlation**: `RunId`, the identifier stamped on every log event of a
//!   single comparison run
//! - **Schema constants**: canonical log field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RunId;
