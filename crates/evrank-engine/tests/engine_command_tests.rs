//! End-to-end engine commands over a temporary store layout.

use chrono::{TimeZone, Utc};
use evrank_core::config::{StorePaths, Thresholds};
use evrank_core::errors::ExErrorKind;
use evrank_engine::{apply_engine_command, ComparisonOutcome, EngineCommand, EngineCommandResult};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const Q4_2024: &str = r#"{
  "period": "Q4 2024",
  "bev_rankings": [
    {"rank": 1, "manufacturer": "Tesla", "model": "Model Y", "sales_units": 400000},
    {"rank": 2, "manufacturer": "BYD", "model": "Seagull", "sales_units": 280000}
  ],
  "phev_rankings": []
}"#;

const Q1_2025: &str = r#"{
  "period": "Q1 2025",
  "bev_rankings": [
    {"rank": 1, "manufacturer": "BYD", "model": "Seagull", "sales_units": 425000},
    {"rank": 2, "manufacturer": "Tesla", "model": "Model Y", "sales_units": 390000},
    {"rank": 3, "manufacturer": "Xiaomi", "model": "SU7", "sales_units": 135000}
  ],
  "phev_rankings": []
}"#;

fn archive(root: &Path, paths: &StorePaths, name: &str, body: &str, day: u32) {
    let file = root.join(name);
    fs::write(&file, body).unwrap();
    let result = apply_engine_command(
        EngineCommand::Archive {
            snapshot: file,
            paths: paths.clone(),
        },
        Utc.with_ymd_and_hms(2025, 4, day, 12, 0, 0).unwrap(),
    )
    .unwrap();
    assert!(matches!(result, EngineCommandResult::Archive(_)));
}

fn compare(paths: &StorePaths) -> evrank_engine::CompareResult {
    let result = apply_engine_command(
        EngineCommand::Compare {
            paths: paths.clone(),
            thresholds: Thresholds::default(),
        },
        Utc.with_ymd_and_hms(2025, 4, 10, 0, 0, 0).unwrap(),
    )
    .unwrap();
    match result {
        EngineCommandResult::Compare(r) => r,
        other => panic!("unexpected result {:?}", other),
    }
}

// S1: Empty store → no-current document written
#[test]
fn test_compare_on_empty_store() {
    let root = TempDir::new().unwrap();
    let paths = StorePaths::new(root.path().join("data"), root.path().join("history"));

    let result = compare(&paths);
    assert_eq!(result.outcome, ComparisonOutcome::NoCurrent);

    let doc: Value =
        serde_json::from_str(&fs::read_to_string(paths.delta_path()).unwrap()).unwrap();
    assert_eq!(doc["error"], "Current rankings not found");
    assert_eq!(doc["has_comparison"], false);
}

// S2: One archive → no-previous document
#[test]
fn test_compare_after_single_archive() {
    let root = TempDir::new().unwrap();
    let paths = StorePaths::new(root.path().join("data"), root.path().join("history"));
    archive(root.path(), &paths, "q4.json", Q4_2024, 1);

    let result = compare(&paths);
    assert_eq!(result.outcome, ComparisonOutcome::NoPrevious);
    assert_eq!(result.report.current_period.as_deref(), Some("Q4 2024"));
}

// S3: Archive twice, then compare → comparison against the older archive
#[test]
fn test_archive_twice_then_compare() {
    let root = TempDir::new().unwrap();
    let paths = StorePaths::new(root.path().join("data"), root.path().join("history"));
    archive(root.path(), &paths, "q4.json", Q4_2024, 1);
    archive(root.path(), &paths, "q1.json", Q1_2025, 2);

    let result = compare(&paths);
    assert_eq!(result.outcome, ComparisonOutcome::Compared);
    assert_eq!(result.location, paths.delta_path().display().to_string());

    let doc: Value =
        serde_json::from_str(&fs::read_to_string(paths.delta_path()).unwrap()).unwrap();
    assert_eq!(doc["current_period"], "Q1 2025");
    assert_eq!(doc["previous_period"], "Q4 2024");
    assert_eq!(doc["generated_at"], "2025-04-10T00:00:00Z");

    // Seagull +145,000 (+51.8%) is high; Xiaomi SU7 is new
    let messages: Vec<&str> = doc["alerts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["message"].as_str().unwrap())
        .collect();
    assert!(messages.contains(&"BYD Seagull sales increased by 145,000 units (+51.8%)"));
    assert!(messages.contains(&"New entry: Xiaomi SU7 (BEV) at rank #3 with 135,000 units"));

    // Derived totals flowed through to the manufacturer deltas
    let manufacturers = doc["manufacturer_deltas"].as_array().unwrap();
    assert_eq!(manufacturers[0]["manufacturer"], "BYD");
    assert_eq!(manufacturers[0]["total_change"], 145_000);
}

// S4: Archiving a missing file is an IO error
#[test]
fn test_archive_missing_file() {
    let root = TempDir::new().unwrap();
    let paths = StorePaths::new(root.path().join("data"), root.path().join("history"));

    let err = apply_engine_command(
        EngineCommand::Archive {
            snapshot: root.path().join("absent.json"),
            paths,
        },
        Utc::now(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Io);
    assert!(err.run_id().is_some());
}
