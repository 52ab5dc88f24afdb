//! Canonical schema constants for structured logging
//!
//! Every log event emitted through the `log_op_*` macros uses these keys.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_RUN_ID: &str = "run_id";

// Snapshot identification
pub const FIELD_CURRENT_PERIOD: &str = "current_period";
pub const FIELD_PREVIOUS_PERIOD: &str = "previous_period";
pub const FIELD_CLASS_TAG: &str = "class_tag";

// Collection sizes
pub const FIELD_MODEL_DELTAS: &str = "model_deltas";
pub const FIELD_MANUFACTURER_DELTAS: &str = "manufacturer_deltas";
pub const FIELD_ALERTS: &str = "alerts";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
