//! Admission aggregation for one reporting period
//!
//! Filters the stays attributed to a period, computes the summary counts and
//! enriches the long stays. File handling lives in `crate::report`.

pub mod attribution;
pub mod long_stays;
pub mod summary;

pub use attribution::{
    AttributionRule, MonthSplit, attribution_date, filter_period, inpatient_days_by_month,
    split_at_period_start,
};
pub use long_stays::{LongStayEnricher, count_prior_admissions, placeholder_name, select_long_stays};
pub use summary::{MonthSummary, SUMMARY_ROW_LABELS};

use crate::config::ReportConfig;
use crate::error::Result;
use crate::models::{LongStayEntry, ReportingPeriod};
use crate::source::AdmissionSource;

/// Everything computed for one reporting period
#[derive(Debug, Clone)]
pub struct UtilizationReport {
    /// The period the report covers
    pub period: ReportingPeriod,
    /// Summary counts for the trend table
    pub summary: MonthSummary,
    /// Enriched long stays for the log
    pub long_stays: Vec<LongStayEntry>,
}

/// Compute the report for `period` from `source`
pub fn build_report<S: AdmissionSource + ?Sized>(
    source: &S,
    period: &ReportingPeriod,
    config: &ReportConfig,
) -> Result<UtilizationReport> {
    log::info!("Building utilization report for {period} ({})", config.attribution);

    if !period.is_calendar_month() {
        log::info!(
            "{period} is not a calendar month, table labels use {}",
            period.column_label()
        );
    }

    let candidates = source.admissions_overlapping(period.start_date(), period.end_date())?;
    let stays = filter_period(&candidates, period, config.attribution);
    log::info!(
        "{} of {} candidate admissions attributed to {}",
        stays.len(),
        candidates.len(),
        period.display_label()
    );

    if stays.is_empty() {
        log::warn!("No acute or psychiatric stays for {}", period.display_label());
    }

    for stay in stays.iter().filter(|s| s.admission_date < period.start_date()) {
        let split = split_at_period_start(stay, period);
        log::debug!(
            "Member {} stay {} spans the period start: {} days before, {} days within",
            stay.member_id,
            stay.date_range_label(),
            split.days_before,
            split.days_within
        );
    }

    let summary = MonthSummary::from_admissions(&stays, config.long_stay_days);
    let long_stays =
        LongStayEnricher::new(source, config.long_stay_days, config.lookback_days).enrich(&stays)?;

    Ok(UtilizationReport {
        period: *period,
        summary,
        long_stays,
    })
}
