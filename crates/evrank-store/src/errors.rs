//! Error handling for evrank-store
//!
//! Wraps evrank-core ExError with store-specific helpers

use evrank_core::errors::{DeltaError, ExError, ExErrorKind};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create a serialization error from serde_json::Error
pub fn serialization_error(operation: &str, err: serde_json::Error) -> ExError {
    ExError::from(DeltaError::from(err)).with_op(operation.to_string())
}

/// Attach the offending file to a snapshot validation error, keeping its kind
pub fn unusable_snapshot(path: &Path, err: ExError) -> ExError {
    ExError::new(err.kind())
        .with_op("load_snapshot")
        .with_message(format!("{} is unusable", path.display()))
        .with_source(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_carries_op() {
        let err = io_error(
            "read_current",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.kind(), ExErrorKind::Io);
        assert_eq!(err.op(), Some("read_current"));
    }

    #[test]
    fn test_serialization_error_carries_op_and_code() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = serialization_error("save_report", json_err);
        assert_eq!(err.kind(), ExErrorKind::Serialization);
        assert_eq!(err.code(), "ERR_SERIALIZATION");
        assert_eq!(err.op(), Some("save_report"));
        assert!(err.message().contains("EOF"));
    }

    #[test]
    fn test_unusable_snapshot_keeps_kind_and_source() {
        let inner = ExError::new(ExErrorKind::MalformedEntity).with_entity_key("BEV: BYD Seagull");
        let err = unusable_snapshot(Path::new("history/ev_rankings_x.json"), inner);
        assert_eq!(err.kind(), ExErrorKind::MalformedEntity);
        assert!(err.message().contains("ev_rankings_x.json"));
        assert_eq!(
            err.source_error().and_then(|e| e.entity_key()),
            Some("BEV: BYD Seagull")
        );
    }
}
