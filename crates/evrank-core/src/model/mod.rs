pub mod alert;
pub mod delta;
pub mod report;
pub mod snapshot;

pub use alert::{Alert, AlertType, Severity};
pub use delta::{ManufacturerDelta, ModelDelta};
pub use report::{DeltaReport, ReportSummary};
pub use snapshot::{
    ClassTag, EntityKey, ManufacturerTotals, ManufacturerTotalsTable, ModelEntry, Snapshot,
    MAX_UNITS,
};
