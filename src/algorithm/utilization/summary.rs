//! Monthly utilization statistics
//!
//! This module computes the summary counts reported in the trend table and
//! renders them into the cells the table expects.

use rustc_hash::FxHashSet;

use crate::models::{AdmissionRecord, ReportingPeriod};

/// Default labels for the trend table rows, top to bottom
pub const SUMMARY_ROW_LABELS: [&str; 4] = [
    "Number of hospital stays (total/ppts/weekend admissions)",
    "Number of hospital days",
    "Number of long stays (7+ days)",
    "Average length of stay",
];

/// Summary statistics for one reporting period
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    /// Number of stays attributed to the period
    pub total_stays: usize,
    /// Number of distinct members among those stays
    pub unique_patients: usize,
    /// Stays admitted on a Saturday or Sunday
    pub weekend_admissions: usize,
    /// Sum of lengths of stay
    pub total_days: i64,
    /// Stays at or above the long-stay threshold
    pub long_stays: usize,
    /// Total days divided by total stays, rounded to 2 decimals; NaN without stays
    pub average_los: f64,
}

impl MonthSummary {
    /// Calculate the summary for the stays already attributed to a period
    #[must_use]
    pub fn from_admissions(stays: &[&AdmissionRecord], long_stay_days: i64) -> Self {
        let total_stays = stays.len();
        let unique_patients = stays
            .iter()
            .map(|s| s.member_id.as_str())
            .collect::<FxHashSet<_>>()
            .len();
        let weekend_admissions = stays.iter().filter(|s| s.is_weekend_admission()).count();
        let total_days = stays.iter().map(|s| s.los).sum::<i64>();
        let long_stays = stays.iter().filter(|s| s.is_long_stay(long_stay_days)).count();

        let average_los = if total_stays > 0 {
            round_to_cents(total_days as f64 / total_stays as f64)
        } else {
            f64::NAN
        };

        Self {
            total_stays,
            unique_patients,
            weekend_admissions,
            total_days,
            long_stays,
            average_los,
        }
    }

    /// Whether an average length of stay could be computed
    #[must_use]
    pub fn has_average(&self) -> bool {
        self.average_los.is_finite()
    }

    /// The `total/unique/weekend` cell, e.g. `16/14/7`
    #[must_use]
    pub fn stays_cell(&self) -> String {
        format!(
            "{}/{}/{}",
            self.total_stays, self.unique_patients, self.weekend_admissions
        )
    }

    /// Average length of stay with two decimals, empty when undefined
    #[must_use]
    pub fn average_cell(&self) -> String {
        if self.has_average() {
            format!("{:.2}", self.average_los)
        } else {
            String::new()
        }
    }

    /// Trend table cells in `SUMMARY_ROW_LABELS` order
    #[must_use]
    pub fn to_cells(&self) -> [String; 4] {
        [
            self.stays_cell(),
            self.total_days.to_string(),
            self.long_stays.to_string(),
            self.average_cell(),
        ]
    }

    /// Generate a console summary for the period
    #[must_use]
    pub fn generate_summary(&self, period: &ReportingPeriod) -> String {
        let mut summary = String::new();
        summary.push_str(&format!("Hospital Utilization Summary: {}\n", period.display_label()));
        summary.push_str(&format!("  Period: {period}\n"));
        summary.push_str(&format!("  Total Stays: {}\n", self.total_stays));
        summary.push_str(&format!("  Unique Participants: {}\n", self.unique_patients));
        summary.push_str(&format!("  Weekend Admissions: {}\n", self.weekend_admissions));
        summary.push_str(&format!("  Inpatient Days: {}\n", self.total_days));
        summary.push_str(&format!("  Long Stays: {}\n", self.long_stays));
        if self.has_average() {
            summary.push_str(&format!("  Average Length of Stay: {:.2}\n", self.average_los));
        } else {
            summary.push_str("  Average Length of Stay: n/a (no stays)\n");
        }
        summary
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
