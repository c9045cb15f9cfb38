//! Reporting algorithms
//!
//! This module implements the utilization aggregation: period attribution,
//! summary statistics and long-stay enrichment.

pub mod utilization;

pub use utilization::{UtilizationReport, build_report};
