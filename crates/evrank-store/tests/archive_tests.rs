//! Snapshot archiver tests.

use chrono::{TimeZone, Utc};
use evrank_core::config::StorePaths;
use evrank_core::errors::ExErrorKind;
use evrank_core::snapshot_source::SnapshotSource;
use evrank_store::{archive_snapshot, FsSnapshotSource};
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const NO_TOTALS: &str = r#"{
  "period": "Q1 2025",
  "bev_rankings": [
    {"rank": 1, "manufacturer": "BYD", "model": "Seagull", "sales_units": 425000},
    {"rank": 2, "manufacturer": "Tesla", "model": "Model Y", "sales_units": 410000}
  ],
  "phev_rankings": [
    {"rank": 1, "manufacturer": "BYD", "model": "Song Plus", "sales_units": 300000}
  ],
  "market_stats": {"bev_share": 0.62}
}"#;

fn layout(root: &TempDir) -> StorePaths {
    StorePaths::new(root.path().join("data"), root.path().join("history"))
}

// S1: Archive writes the current slot and a timestamped history copy
#[test]
fn test_archive_writes_current_and_history() {
    let root = TempDir::new().unwrap();
    let paths = layout(&root);
    let now = Utc.with_ymd_and_hms(2025, 4, 1, 9, 30, 5).unwrap();

    let outcome = archive_snapshot(NO_TOTALS.as_bytes(), &paths, now).unwrap();

    assert_eq!(outcome.period, "Q1 2025");
    assert_eq!(outcome.current_path, paths.current_path());
    assert_eq!(
        outcome.history_path,
        paths.history_dir.join("ev_rankings_20250401_093005.json")
    );
    assert_eq!(
        fs::read(&outcome.current_path).unwrap(),
        fs::read(&outcome.history_path).unwrap()
    );
}

// S2: Missing totals are derived; unrelated fields are kept
#[test]
fn test_archive_derives_missing_totals() {
    let root = TempDir::new().unwrap();
    let paths = layout(&root);
    let now = Utc.with_ymd_and_hms(2025, 4, 1, 9, 30, 5).unwrap();

    let outcome = archive_snapshot(NO_TOTALS.as_bytes(), &paths, now).unwrap();
    assert!(outcome.derived_totals);

    let stored: Value =
        serde_json::from_str(&fs::read_to_string(&outcome.current_path).unwrap()).unwrap();
    assert_eq!(stored["manufacturer_totals"]["BYD"]["total"], 725_000);
    assert_eq!(stored["manufacturer_totals"]["Tesla"]["phev"], 0);
    assert_eq!(stored["market_stats"]["bev_share"], 0.62);
}

// S3: Supplied totals are left as they are
#[test]
fn test_archive_keeps_supplied_totals() {
    let root = TempDir::new().unwrap();
    let paths = layout(&root);
    let doc = r#"{"period": "Q1", "manufacturer_totals": {"Tesla": {"bev": 5, "phev": 0, "total": 5}}}"#;

    let outcome = archive_snapshot(doc.as_bytes(), &paths, Utc::now()).unwrap();
    assert!(!outcome.derived_totals);

    let stored: Value =
        serde_json::from_str(&fs::read_to_string(&outcome.current_path).unwrap()).unwrap();
    assert_eq!(stored["manufacturer_totals"]["Tesla"]["total"], 5);
}

// S4: An invalid document writes nothing
#[test]
fn test_invalid_document_writes_nothing() {
    let root = TempDir::new().unwrap();
    let paths = layout(&root);

    let err = archive_snapshot(br#"{"bev_rankings": []}"#, &paths, Utc::now()).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidSnapshot);
    assert!(!paths.current_path().exists());
    assert!(!paths.history_dir.exists());
}

// S5: Two archives give the source a previous snapshot to select
#[test]
fn test_two_archives_make_history_sufficient() {
    let root = TempDir::new().unwrap();
    let paths = layout(&root);
    let first = r#"{"period": "Q4 2024", "bev_rankings": []}"#;
    let second = r#"{"period": "Q1 2025", "bev_rankings": []}"#;

    archive_snapshot(
        first.as_bytes(),
        &paths,
        Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap(),
    )
    .unwrap();
    let source = FsSnapshotSource::new(paths.clone());
    assert_eq!(
        source.load_previous().unwrap_err().kind(),
        ExErrorKind::InsufficientHistory
    );

    archive_snapshot(
        second.as_bytes(),
        &paths,
        Utc.with_ymd_and_hms(2025, 4, 2, 0, 0, 0).unwrap(),
    )
    .unwrap();
    assert_eq!(source.load_current().unwrap().period, "Q1 2025");
    assert_eq!(source.load_previous().unwrap().period, "Q4 2024");
}

// S6: A second archive within the same second is refused and leaves the first intact
#[test]
fn test_same_second_archive_is_refused() {
    let root = TempDir::new().unwrap();
    let paths = layout(&root);
    let now = Utc.with_ymd_and_hms(2025, 4, 1, 9, 30, 5).unwrap();
    let second = r#"{"period": "Q2 2025", "bev_rankings": []}"#;

    let outcome = archive_snapshot(NO_TOTALS.as_bytes(), &paths, now).unwrap();
    let err = archive_snapshot(second.as_bytes(), &paths, now).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Io);
    assert!(err.message().contains("ev_rankings_20250401_093005.json"));
    let stored: Value =
        serde_json::from_str(&fs::read_to_string(&outcome.history_path).unwrap()).unwrap();
    assert_eq!(stored["period"], "Q1 2025");
    let current: Value =
        serde_json::from_str(&fs::read_to_string(paths.current_path()).unwrap()).unwrap();
    assert_eq!(current["period"], "Q1 2025");
}

// S7: Derived totals that overflow are rejected before anything is written
#[test]
fn test_overflowing_derived_totals_write_nothing() {
    let root = TempDir::new().unwrap();
    let paths = layout(&root);
    let doc = format!(
        r#"{{"period": "Q1 2025", "bev_rankings": [
            {{"rank": 1, "manufacturer": "A", "model": "X", "sales_units": {max}}},
            {{"rank": 2, "manufacturer": "A", "model": "Y", "sales_units": {max}}}
        ]}}"#,
        max = i64::MAX
    );

    let err = archive_snapshot(doc.as_bytes(), &paths, Utc::now()).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::MalformedEntity);
    assert!(!paths.current_path().exists());
    assert!(!paths.history_dir.exists());
}
