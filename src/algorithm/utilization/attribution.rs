//! Period attribution for inpatient stays
//!
//! Every stay is mapped to a single attribution date; a stay belongs to the
//! reporting period whose window contains that date. Because the mapping is a
//! function of the stay alone, non-overlapping periods never share a stay.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::error::ReportError;
use crate::models::period::{first_day_of_month, last_day_of_month};
use crate::models::{AdmissionRecord, ReportingPeriod};

/// Rule deciding which period a stay counts towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttributionRule {
    /// The period containing the discharge date
    #[default]
    DischargeDate,
    /// The month holding most inpatient days; ties go to the later month
    MajorityOfDays,
}

impl FromStr for AttributionRule {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "discharge-date" | "discharge" => Ok(Self::DischargeDate),
            "majority-of-days" | "majority" => Ok(Self::MajorityOfDays),
            other => Err(ReportError::invalid_input(format!(
                "Unknown attribution rule: {other}"
            ))),
        }
    }
}

impl fmt::Display for AttributionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DischargeDate => write!(f, "discharge-date"),
            Self::MajorityOfDays => write!(f, "majority-of-days"),
        }
    }
}

/// Inpatient days of a stay on either side of a period's first day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSplit {
    /// Days before the period start
    pub days_before: i64,
    /// Days on or after the period start
    pub days_within: i64,
}

/// Split a stay at the first day of `period`
///
/// Days are counted as nights, so a stay from Mar 30 to Apr 3 split at Apr 1
/// has two days before and two days within.
#[must_use]
pub fn split_at_period_start(record: &AdmissionRecord, period: &ReportingPeriod) -> MonthSplit {
    let start = period.start_date();
    let days_before = (record.discharge_date.min(start) - record.admission_date)
        .num_days()
        .max(0);
    let days_within = (record.discharge_date - record.admission_date.max(start))
        .num_days()
        .max(0);

    MonthSplit {
        days_before,
        days_within,
    }
}

/// Inpatient nights per calendar month, keyed by the month's first day
///
/// Months are returned in chronological order. A same-day stay yields no
/// entries.
#[must_use]
pub fn inpatient_days_by_month(record: &AdmissionRecord) -> Vec<(NaiveDate, i64)> {
    let mut months = Vec::new();
    let mut cursor = record.admission_date;

    while cursor < record.discharge_date {
        let next_month = match last_day_of_month(cursor).and_then(|d| d.succ_opt()) {
            Some(next) => next,
            None => break,
        };
        let segment_end = next_month.min(record.discharge_date);
        months.push((first_day_of_month(cursor), (segment_end - cursor).num_days()));
        cursor = segment_end;
    }

    months
}

/// The single date that decides which period a stay belongs to
#[must_use]
pub fn attribution_date(record: &AdmissionRecord, rule: AttributionRule) -> NaiveDate {
    match rule {
        AttributionRule::DischargeDate => record.discharge_date,
        AttributionRule::MajorityOfDays => {
            let mut best: Option<(NaiveDate, i64)> = None;
            for (month, days) in inpatient_days_by_month(record) {
                // >= so later months win ties
                if best.is_none_or(|(_, best_days)| days >= best_days) {
                    best = Some((month, days));
                }
            }

            match best {
                Some((month, _))
                    if (month.year(), month.month())
                        != (record.discharge_date.year(), record.discharge_date.month()) =>
                {
                    last_day_of_month(month).unwrap_or(record.discharge_date)
                }
                _ => record.discharge_date,
            }
        }
    }
}

/// Select the reported stays attributed to `period`
///
/// Keeps acute and psychiatric stays only, then applies the attribution rule.
#[must_use]
pub fn filter_period<'a>(
    records: &'a [AdmissionRecord],
    period: &ReportingPeriod,
    rule: AttributionRule,
) -> Vec<&'a AdmissionRecord> {
    records
        .iter()
        .filter(|r| r.category.is_reported())
        .filter(|r| period.contains(&attribution_date(r, rule)))
        .collect()
}
