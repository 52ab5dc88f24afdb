//! Delta engines.
//!
//! Compare two snapshots and produce per-model and per-manufacturer change
//! records.
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical output, element for element.
//! - **Current-side iteration for models**: a model that drops out of a
//!   ranking produces no delta. Manufacturers are compared over the union of
//!   both sides, so a vanished manufacturer still shows up.
//! - **Rounding**: every percentage is rounded to one decimal place, half
//!   away from zero.

pub mod manufacturer_engine;
pub mod model_engine;
pub mod percent;

pub use manufacturer_engine::compute_manufacturer_deltas;
pub use model_engine::{compute_model_deltas, is_model_change_significant};
pub use percent::{percent_change, round_one_decimal, signed_change};
