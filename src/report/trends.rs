//! Trend table merge
//!
//! The trend table has one row per metric and one column per month. A new
//! month is written positionally into the first four data rows; re-running a
//! month overwrites its column.

use crate::algorithm::utilization::{MonthSummary, SUMMARY_ROW_LABELS};
use crate::report::table::CsvTable;

/// Header of the metric label column in a freshly started table
pub const METRIC_COLUMN: &str = "Metric";

/// Return a copy of `table` with `summary` stored under the column `label`
#[must_use]
pub fn merge_summary_column(table: &CsvTable, label: &str, summary: &MonthSummary) -> CsvTable {
    let mut merged = if table.has_headers() {
        table.clone()
    } else {
        CsvTable::new([METRIC_COLUMN])
    };

    // Tables shorter than the metric list get labelled rows appended
    for label_text in SUMMARY_ROW_LABELS.iter().skip(merged.row_count()) {
        merged.push_row(vec![(*label_text).to_string()]);
    }

    if merged.column_index(label).is_some() {
        log::info!("Overwriting existing trend column {label}");
    }
    merged.set_column(label, &summary.to_cells());
    merged
}
