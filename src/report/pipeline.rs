//! Report pipeline
//!
//! load snapshot -> compute report -> merge -> persist. The snapshot is loaded
//! before the database is queried so a missing table fails the run early.

use std::time::Instant;

use crate::algorithm::{UtilizationReport, build_report};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::models::ReportingPeriod;
use crate::report::long_stay_log::prepend_long_stays;
use crate::report::table::CsvTable;
use crate::report::trends::merge_summary_column;
use crate::source::AdmissionSource;
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// In-memory copy of both persisted tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSnapshot {
    /// Trend table, one column per month
    pub trends: CsvTable,
    /// Long-stay log, newest month first
    pub long_stays: CsvTable,
}

impl ReportSnapshot {
    /// Read both tables named in the configuration
    pub fn load(config: &ReportConfig) -> Result<Self> {
        log_operation_start("Loading trend table", &config.trend_table);
        let trends = CsvTable::read(&config.trend_table)?;

        log_operation_start("Loading long-stay log", &config.long_stay_log);
        let long_stays = CsvTable::read(&config.long_stay_log)?;

        Ok(Self { trends, long_stays })
    }

    /// Merge a computed report into a new snapshot
    #[must_use]
    pub fn merge(&self, report: &UtilizationReport) -> Self {
        Self {
            trends: merge_summary_column(
                &self.trends,
                &report.period.column_label(),
                &report.summary,
            ),
            long_stays: prepend_long_stays(
                &self.long_stays,
                &report.period.section_header(),
                &report.long_stays,
            ),
        }
    }

    /// Write both tables back to their configured paths
    pub fn persist(&self, config: &ReportConfig) -> Result<()> {
        let start = Instant::now();
        self.trends.write(&config.trend_table)?;
        log_operation_complete(
            "wrote",
            &config.trend_table,
            self.trends.row_count(),
            Some(start.elapsed()),
        );

        let start = Instant::now();
        self.long_stays.write(&config.long_stay_log)?;
        log_operation_complete(
            "wrote",
            &config.long_stay_log,
            self.long_stays.row_count(),
            Some(start.elapsed()),
        );
        Ok(())
    }
}

/// Run a full report for one period and update both tables on disk
pub fn run_report<S: AdmissionSource + ?Sized>(
    source: &S,
    period: &ReportingPeriod,
    config: &ReportConfig,
) -> Result<UtilizationReport> {
    let start = Instant::now();
    let snapshot = ReportSnapshot::load(config)?;
    let report = build_report(source, period, config)?;

    snapshot.merge(&report).persist(config)?;
    log::info!(
        "Report for {} finished in {:?}",
        period.display_label(),
        start.elapsed()
    );
    Ok(report)
}
