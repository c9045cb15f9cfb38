//! Module for handling date parsing from the admissions database.

use chrono::{NaiveDate, NaiveDateTime};

/// Date-only formats tried in order
pub const DATE_FORMATS: [&str; 4] = [
    "%Y-%m-%d", // ISO format: 2019-03-15
    "%m/%d/%Y", // US: 03/15/2019
    "%Y/%m/%d", // 2019/03/15
    "%Y%m%d",   // Compact: 20190315
];

/// Date-time formats whose date part is kept
pub const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Parse a date string with multiple format attempts
#[must_use]
pub fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(s, format) {
            return Some(datetime.date());
        }
    }

    None
}
