//! Admission entity model
//!
//! This module contains the `AdmissionRecord` model, one inpatient stay of a
//! program member as loaded from the admissions database.

use chrono::{Datelike, NaiveDate, Weekday};

/// Category of an inpatient admission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdmissionCategory {
    /// Acute hospital stay
    Acute,
    /// Psychiatric unit or facility stay
    Psychiatric,
    /// Any other admission type (observation, rehab, ...), never reported
    Other,
}

impl From<&str> for AdmissionCategory {
    fn from(s: &str) -> Self {
        let normalized = s.trim().to_lowercase();
        if normalized.contains("psych") {
            AdmissionCategory::Psychiatric
        } else if normalized.contains("acute") {
            AdmissionCategory::Acute
        } else {
            AdmissionCategory::Other
        }
    }
}

impl AdmissionCategory {
    /// Whether stays of this category count towards the utilization report
    #[must_use]
    pub fn is_reported(self) -> bool {
        matches!(self, Self::Acute | Self::Psychiatric)
    }
}

/// A single inpatient stay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissionRecord {
    /// Program member identifier
    pub member_id: String,
    /// Date of admission
    pub admission_date: NaiveDate,
    /// Date of discharge
    pub discharge_date: NaiveDate,
    /// Facility name
    pub facility: String,
    /// Length of stay in days
    pub los: i64,
    /// Admission category
    pub category: AdmissionCategory,
}

impl AdmissionRecord {
    /// Create a new admission, deriving the length of stay from the dates
    #[must_use]
    pub fn new(
        member_id: impl Into<String>,
        admission_date: NaiveDate,
        discharge_date: NaiveDate,
        facility: impl Into<String>,
        category: AdmissionCategory,
    ) -> Self {
        Self {
            member_id: member_id.into(),
            admission_date,
            discharge_date,
            facility: facility.into(),
            los: Self::days_between(admission_date, discharge_date),
            category,
        }
    }

    /// Override the derived length of stay with the value recorded at the source
    #[must_use]
    pub fn with_los(mut self, los: i64) -> Self {
        self.los = los.max(0);
        self
    }

    /// Discharge minus admission in days, never negative
    #[must_use]
    pub fn days_between(admission_date: NaiveDate, discharge_date: NaiveDate) -> i64 {
        (discharge_date - admission_date).num_days().max(0)
    }

    /// Weekday of the admission date
    #[must_use]
    pub fn admission_weekday(&self) -> Weekday {
        self.admission_date.weekday()
    }

    /// Whether the admission happened on a Saturday or Sunday
    #[must_use]
    pub fn is_weekend_admission(&self) -> bool {
        matches!(self.admission_weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Whether the stay meets the long-stay threshold (inclusive)
    #[must_use]
    pub fn is_long_stay(&self, threshold_days: i64) -> bool {
        self.los >= threshold_days
    }

    /// Date range formatted as `MM/DD-MM/DD`
    #[must_use]
    pub fn date_range_label(&self) -> String {
        format!(
            "{}-{}",
            self.admission_date.format("%m/%d"),
            self.discharge_date.format("%m/%d")
        )
    }
}
