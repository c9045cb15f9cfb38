//! Admission data sources
//!
//! The aggregator only needs three queries: the stays touching a date window,
//! the full history of one member, and a member's display name. Anything that
//! can answer them can feed a report.

pub mod memory;
pub mod sqlite;

use chrono::NaiveDate;

use crate::error::Result;
use crate::models::AdmissionRecord;

pub use memory::MemorySource;
pub use sqlite::SqliteSource;

/// Read access to admissions and participant names
pub trait AdmissionSource {
    /// Stays with `admission_date <= end` and `discharge_date >= start`
    fn admissions_overlapping(&self, start: NaiveDate, end: NaiveDate)
    -> Result<Vec<AdmissionRecord>>;

    /// Every stay of one member, regardless of date
    fn member_history(&self, member_id: &str) -> Result<Vec<AdmissionRecord>>;

    /// Display name (`first last`) of a member, `None` if the member is unknown
    fn participant_name(&self, member_id: &str) -> Result<Option<String>>;
}
