//! Monthly hospital utilization reporting for a care program.
//!
//! Pulls inpatient admissions from the reporting database, attributes them to
//! a reporting period, computes the trend-table summary and the enriched
//! long-stay list, and folds both into the running CSV reports.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod prompt;
pub mod report;
pub mod source;
pub mod utils;

// Re-export the most common types for easier use
pub use algorithm::utilization::{AttributionRule, MonthSummary};
pub use algorithm::{UtilizationReport, build_report};
pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use models::{AdmissionCategory, AdmissionRecord, LongStayEntry, ReportingPeriod};
pub use report::{CsvTable, ReportSnapshot, run_report};
pub use source::{AdmissionSource, MemorySource, SqliteSource};
