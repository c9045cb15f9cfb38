//! Configuration for the hospital trend report.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::algorithm::utilization::AttributionRule;
use crate::error::util::safe_read_to_string;
use crate::error::{ReportError, Result};

/// Default minimum length of stay for a long stay
pub const DEFAULT_LONG_STAY_DAYS: i64 = 7;

/// Default look-back window in days (about six months)
pub const DEFAULT_LOOKBACK_DAYS: i64 = 182;

/// Longest accepted look-back window in days (about ten years)
pub const MAX_LOOKBACK_DAYS: i64 = 3660;

/// Configuration for a report run
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Path of the SQLite admissions database
    pub database: PathBuf,
    /// Path of the trend table CSV
    pub trend_table: PathBuf,
    /// Path of the long-stay log CSV
    pub long_stay_log: PathBuf,
    /// Minimum length of stay (inclusive) counted as a long stay
    pub long_stay_days: i64,
    /// Look-back window for prior admissions, in days
    pub lookback_days: i64,
    /// How stays are attributed to a reporting period
    pub attribution: AttributionRule,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from("reporting.db"),
            trend_table: PathBuf::from("output/hospital_trends.csv"),
            long_stay_log: PathBuf::from("output/long_stays.csv"),
            long_stay_days: DEFAULT_LONG_STAY_DAYS,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            attribution: AttributionRule::default(),
        }
    }
}

impl ReportConfig {
    /// Create a new configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    ///
    /// Keys missing from the file keep their default values.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = safe_read_to_string(path, "report configuration")?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| ReportError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Set the admissions database path
    #[must_use]
    pub fn with_database(mut self, database: impl Into<PathBuf>) -> Self {
        self.database = database.into();
        self
    }

    /// Set both table paths
    #[must_use]
    pub fn with_tables(
        mut self,
        trend_table: impl Into<PathBuf>,
        long_stay_log: impl Into<PathBuf>,
    ) -> Self {
        self.trend_table = trend_table.into();
        self.long_stay_log = long_stay_log.into();
        self
    }

    /// Set the attribution rule
    #[must_use]
    pub fn with_attribution(mut self, attribution: AttributionRule) -> Self {
        self.attribution = attribution;
        self
    }

    /// Set the look-back window length
    #[must_use]
    pub fn with_lookback_days(mut self, days: i64) -> Self {
        self.lookback_days = days;
        self
    }

    /// Check that thresholds are usable
    pub fn validate(&self) -> Result<()> {
        if self.long_stay_days < 1 {
            return Err(ReportError::Config(format!(
                "long_stay_days must be at least 1, got {}",
                self.long_stay_days
            )));
        }
        if !(1..=MAX_LOOKBACK_DAYS).contains(&self.lookback_days) {
            return Err(ReportError::Config(format!(
                "lookback_days must be between 1 and {MAX_LOOKBACK_DAYS}, got {}",
                self.lookback_days
            )));
        }
        Ok(())
    }
}
