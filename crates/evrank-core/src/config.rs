//! Comparison configuration.
//!
//! Thresholds are an immutable value handed to every engine call. The
//! surrounding layout (where snapshots live, how many alerts to print) is
//! loaded from an optional TOML file; every key may be omitted.
//!
//! ```toml
//! [thresholds]
//! significant_sales_change = 10000
//! significant_rank_change = 2
//! significant_growth_percent = 50.0
//! high_severity_sales_change = 50000
//!
//! [paths]
//! data_dir = "data"
//! history_dir = "history"
//!
//! [console]
//! alert_limit = 10
//! ```

use crate::errors::{DeltaError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Change thresholds that decide significance and alert severity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    /// Absolute unit change that makes a delta significant
    pub significant_sales_change: u64,
    /// Absolute rank movement that makes a model delta significant
    pub significant_rank_change: u64,
    /// Absolute percent change that makes a model delta significant
    pub significant_growth_percent: f64,
    /// Sales alerts strictly above this unit change are `high` severity
    pub high_severity_sales_change: u64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            significant_sales_change: 10_000,
            significant_rank_change: 2,
            significant_growth_percent: 50.0,
            high_severity_sales_change: 50_000,
        }
    }
}

impl Thresholds {
    /// Reject thresholds that would flag every delta or none
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when any threshold is zero, negative, or not finite.
    pub fn validate(&self) -> Result<()> {
        if self.significant_sales_change == 0 {
            return Err(invalid("significant_sales_change must be > 0"));
        }
        if self.significant_rank_change == 0 {
            return Err(invalid("significant_rank_change must be > 0"));
        }
        if !self.significant_growth_percent.is_finite() || self.significant_growth_percent <= 0.0
        {
            return Err(invalid(
                "significant_growth_percent must be a finite number > 0",
            ));
        }
        if self.high_severity_sales_change == 0 {
            return Err(invalid("high_severity_sales_change must be > 0"));
        }
        Ok(())
    }
}

/// Filesystem layout of snapshot history and outputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorePaths {
    pub data_dir: PathBuf,
    pub history_dir: PathBuf,
    /// File name of the current snapshot inside `data_dir`
    pub current_file: String,
    /// File name of the delta document inside `data_dir`
    pub delta_file: String,
    /// Prefix of timestamped snapshot files inside `history_dir`
    pub history_prefix: String,
}

impl Default for StorePaths {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            history_dir: PathBuf::from("history"),
            current_file: "ev_rankings_latest.json".to_string(),
            delta_file: "ev_rankings_delta.json".to_string(),
            history_prefix: "ev_rankings_".to_string(),
        }
    }
}

impl StorePaths {
    /// Default file names rooted at the given directories
    pub fn new(data_dir: impl Into<PathBuf>, history_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            history_dir: history_dir.into(),
            ..Self::default()
        }
    }

    pub fn current_path(&self) -> PathBuf {
        self.data_dir.join(&self.current_file)
    }

    pub fn delta_path(&self) -> PathBuf {
        self.data_dir.join(&self.delta_file)
    }

    /// History file for a `YYYYmmdd_HHMMSS` stamp
    pub fn history_path(&self, stamp: &str) -> PathBuf {
        self.history_dir
            .join(format!("{}{}.json", self.history_prefix, stamp))
    }

    /// Whether a file name belongs to the snapshot history
    pub fn is_history_file(&self, file_name: &str) -> bool {
        file_name.starts_with(&self.history_prefix) && file_name.ends_with(".json")
    }
}

/// Console summary options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleOptions {
    /// Maximum number of alerts printed before truncating
    pub alert_limit: usize,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self { alert_limit: 10 }
    }
}

/// Complete configuration for a comparison run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeltaConfig {
    pub thresholds: Thresholds,
    pub paths: StorePaths,
    pub console: ConsoleOptions,
}

impl DeltaConfig {
    /// Parse and validate a TOML document
    ///
    /// # Errors
    ///
    /// `InvalidConfig` on TOML syntax errors, unknown keys, or unusable thresholds.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: DeltaConfig = toml::from_str(text).map_err(|e| DeltaError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.thresholds.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the file cannot be read or fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| DeltaError::InvalidConfig {
            reason: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&text)
    }
}

fn invalid(reason: &str) -> crate::errors::ExError {
    DeltaError::InvalidConfig {
        reason: reason.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;

    #[test]
    fn test_defaults_match_documented_constants() {
        let t = Thresholds::default();
        assert_eq!(t.significant_sales_change, 10_000);
        assert_eq!(t.significant_rank_change, 2);
        assert_eq!(t.significant_growth_percent, 50.0);
        assert_eq!(t.high_severity_sales_change, 50_000);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config = DeltaConfig::from_toml_str("").unwrap();
        assert_eq!(config, DeltaConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = DeltaConfig::from_toml_str(
            "[thresholds]\nsignificant_rank_change = 5\n\n[console]\nalert_limit = 3\n",
        )
        .unwrap();
        assert_eq!(config.thresholds.significant_rank_change, 5);
        assert_eq!(config.thresholds.significant_sales_change, 10_000);
        assert_eq!(config.console.alert_limit, 3);
        assert_eq!(config.paths, StorePaths::default());
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let err = DeltaConfig::from_toml_str("[thresholds]\nsignificant_sales_change = 0\n")
            .unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = DeltaConfig::from_toml_str("[thresholds]\nsales = 1\n").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
    }

    #[test]
    fn test_store_paths_layout() {
        let paths = StorePaths::new("/d", "/h");
        assert_eq!(
            paths.current_path(),
            PathBuf::from("/d/ev_rankings_latest.json")
        );
        assert_eq!(paths.delta_path(), PathBuf::from("/d/ev_rankings_delta.json"));
        assert_eq!(
            paths.history_path("20250101_120000"),
            PathBuf::from("/h/ev_rankings_20250101_120000.json")
        );
        assert!(paths.is_history_file("ev_rankings_20250101_120000.json"));
        assert!(!paths.is_history_file("ev_rankings_20250101_120000.json.tmp"));
        assert!(!paths.is_history_file("notes.json"));
    }
}
