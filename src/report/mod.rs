//! Persisted report tables
//!
//! CSV snapshots of the trend table and the long-stay log, the pure merge
//! steps that fold a new month into them, and the pipeline that ties loading,
//! computing and writing together.

pub mod long_stay_log;
pub mod pipeline;
pub mod table;
pub mod trends;

pub use long_stay_log::prepend_long_stays;
pub use pipeline::{ReportSnapshot, run_report};
pub use table::CsvTable;
pub use trends::merge_summary_column;
