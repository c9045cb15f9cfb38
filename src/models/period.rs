//! Reporting periods
//!
//! A reporting period is an inclusive date range, normally one calendar month.
//! It also owns the labels used for the trend table column and the long-stay
//! section header.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::error::{ReportError, Result};

/// An inclusive date range covered by one report run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReportingPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl ReportingPeriod {
    /// The calendar month `month` of `year`
    pub fn month(year: i32, month: u32) -> Result<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| ReportError::invalid_input(format!("Invalid month: {month}/{year}")))?;
        let end = last_day_of_month(start)
            .ok_or_else(|| ReportError::invalid_input(format!("Month out of range: {month}/{year}")))?;
        Ok(Self { start, end })
    }

    /// An explicit inclusive range
    pub fn from_range(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(ReportError::invalid_input(format!(
                "Period end {end} is before start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// The most recently completed calendar month relative to `today`
    pub fn last_completed_month(today: NaiveDate) -> Result<Self> {
        let (year, month) = if today.month() == 1 {
            (today.year() - 1, 12)
        } else {
            (today.year(), today.month() - 1)
        };
        Self::month(year, month)
    }

    /// First day of the period (inclusive)
    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the period (inclusive)
    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.end
    }

    /// Check if this period contains the given date
    #[must_use]
    pub fn contains(&self, date: &NaiveDate) -> bool {
        &self.start <= date && date <= &self.end
    }

    /// Whether the period is exactly one calendar month
    #[must_use]
    pub fn is_calendar_month(&self) -> bool {
        self.start.day() == 1 && last_day_of_month(self.start) == Some(self.end)
    }

    /// Trend table column name, e.g. `Mar_2019`
    #[must_use]
    pub fn column_label(&self) -> String {
        self.start.format("%b_%Y").to_string()
    }

    /// Human readable month, e.g. `Mar 2019`
    #[must_use]
    pub fn display_label(&self) -> String {
        self.start.format("%b %Y").to_string()
    }

    /// Long-stay log section header, e.g. `In Mar 2019`
    #[must_use]
    pub fn section_header(&self) -> String {
        format!("In {}", self.display_label())
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

impl FromStr for ReportingPeriod {
    type Err = ReportError;

    /// Parse a string into a `ReportingPeriod`
    ///
    /// Supported formats:
    /// - "2019-03-01,2019-03-31" - explicit range (YYYY-MM-DD,YYYY-MM-DD)
    /// - "2019-03" - calendar month (YYYY-MM)
    /// - "3/2019" or "03/2019" - calendar month (MM/YYYY)
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().trim_matches(|c| c == '(' || c == ')');

        if let Some((start, end)) = s.split_once(',') {
            let start = parse_iso_date(start)?;
            let end = parse_iso_date(end)?;
            return Self::from_range(start, end);
        }

        if let Some((month, year)) = s.split_once('/') {
            let (month, year) = parse_month_year(month, year)?;
            return Self::month(year, month);
        }

        if let Some((year, month)) = s.split_once('-') {
            let (month, year) = parse_month_year(month, year)?;
            return Self::month(year, month);
        }

        Err(ReportError::invalid_input(format!(
            "Invalid period format: {s} (expected YYYY-MM-DD,YYYY-MM-DD or MM/YYYY)"
        )))
    }
}

/// Last day of the month containing `date`
#[must_use]
pub fn last_day_of_month(date: NaiveDate) -> Option<NaiveDate> {
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)?
    };
    next_month.pred_opt()
}

/// First day of the month containing `date`
#[must_use]
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn parse_iso_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim().trim_matches(|c| c == '\'' || c == '"').trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| ReportError::invalid_input(format!("Invalid date '{s}': {e}")))
}

fn parse_month_year(month: &str, year: &str) -> Result<(u32, i32)> {
    let month = month
        .trim()
        .parse::<u32>()
        .map_err(|_| ReportError::invalid_input(format!("Month is not a number: '{}'", month.trim())))?;
    let year = year
        .trim()
        .parse::<i32>()
        .map_err(|_| ReportError::invalid_input(format!("Year is not a number: '{}'", year.trim())))?;
    if !(1..=12).contains(&month) {
        return Err(ReportError::invalid_input(format!("Invalid month: {month}")));
    }
    if year < 1900 {
        return Err(ReportError::invalid_input(format!("Year must have four digits: {year}")));
    }
    Ok((month, year))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        let feb = ReportingPeriod::month(2020, 2).unwrap();
        assert_eq!(feb.start_date(), date(2020, 2, 1));
        assert_eq!(feb.end_date(), date(2020, 2, 29)); // 2020 is a leap year

        let dec = ReportingPeriod::month(2018, 12).unwrap();
        assert_eq!(dec.end_date(), date(2018, 12, 31));
        assert!(dec.is_calendar_month());

        assert!(ReportingPeriod::month(2019, 13).is_err());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let march = ReportingPeriod::month(2019, 3).unwrap();
        assert!(march.contains(&date(2019, 3, 1)));
        assert!(march.contains(&date(2019, 3, 31)));
        assert!(!march.contains(&date(2019, 2, 28)));
        assert!(!march.contains(&date(2019, 4, 1)));
    }

    #[test]
    fn test_last_completed_month() {
        let period = ReportingPeriod::last_completed_month(date(2019, 4, 15)).unwrap();
        assert_eq!(period, ReportingPeriod::month(2019, 3).unwrap());

        let january = ReportingPeriod::last_completed_month(date(2020, 1, 2)).unwrap();
        assert_eq!(january, ReportingPeriod::month(2019, 12).unwrap());
    }

    #[test]
    fn test_labels() {
        let march = ReportingPeriod::month(2019, 3).unwrap();
        assert_eq!(march.column_label(), "Mar_2019");
        assert_eq!(march.display_label(), "Mar 2019");
        assert_eq!(march.section_header(), "In Mar 2019");
    }

    #[test]
    fn test_parse_formats() {
        let march = ReportingPeriod::month(2019, 3).unwrap();
        assert_eq!("2019-03-01,2019-03-31".parse::<ReportingPeriod>().unwrap(), march);
        assert_eq!("('2019-03-01', '2019-03-31')".parse::<ReportingPeriod>().unwrap(), march);
        assert_eq!("3/2019".parse::<ReportingPeriod>().unwrap(), march);
        assert_eq!("2019-03".parse::<ReportingPeriod>().unwrap(), march);

        let custom = "2019-03-10,2019-04-09".parse::<ReportingPeriod>().unwrap();
        assert!(!custom.is_calendar_month());
        assert_eq!(custom.column_label(), "Mar_2019");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("march".parse::<ReportingPeriod>().unwrap_err().is_input_error());
        assert!("13/2019".parse::<ReportingPeriod>().is_err());
        assert!("3/19".parse::<ReportingPeriod>().is_err());
        assert!("x/2019".parse::<ReportingPeriod>().is_err());
        assert!("2019-03-31,2019-03-01".parse::<ReportingPeriod>().is_err());
    }
}
