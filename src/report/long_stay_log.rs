//! Long-stay log merge
//!
//! New months go on top: a section header row followed by the month's long
//! stays. The log is not deduplicated, so processing the same month twice
//! leaves two sections for it; remove the older one by hand.

use crate::models::LongStayEntry;
use crate::models::long_stay::LONG_STAY_COLUMNS;
use crate::report::table::CsvTable;

/// Return a copy of `log` with a new section prepended
///
/// Entries are mapped onto the log's own columns by name; columns the entries
/// do not know stay empty. A log without a header row gets the standard
/// columns.
#[must_use]
pub fn prepend_long_stays(log: &CsvTable, section_header: &str, entries: &[LongStayEntry]) -> CsvTable {
    let mut merged = if log.has_headers() {
        log.clone()
    } else {
        CsvTable::new(LONG_STAY_COLUMNS)
    };

    let headers = merged.headers().to_vec();
    let header_idx = headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(LONG_STAY_COLUMNS[0]))
        .unwrap_or(0);

    let mut section_row = vec![String::new(); headers.len()];
    section_row[header_idx] = section_header.to_string();

    let mut new_rows = Vec::with_capacity(entries.len() + 1);
    new_rows.push(section_row);
    new_rows.extend(entries.iter().map(|entry| {
        headers
            .iter()
            .map(|column| entry.cell(column).unwrap_or_default())
            .collect::<Vec<_>>()
    }));

    merged.prepend_rows(new_rows);
    merged
}
