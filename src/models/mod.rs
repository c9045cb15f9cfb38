//! Data models for the utilization report
//!
//! Admission records loaded from the source, the reporting period a run
//! covers, and the derived long-stay entries.

pub mod admission;
pub mod long_stay;
pub mod period;

pub use admission::{AdmissionCategory, AdmissionRecord};
pub use long_stay::LongStayEntry;
pub use period::ReportingPeriod;
