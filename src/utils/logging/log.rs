//! Logging utilities
//!
//! Standardized messages for file operations on the report tables.

use std::path::Path;

/// Log the start of a file operation
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{operation} {}", path.display());
}

/// Log the completion of a file operation
///
/// # Arguments
/// * `operation` - Past-tense verb, e.g. "wrote"
/// * `path` - File that was operated on
/// * `rows` - Number of table rows involved
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(
    operation: &str,
    path: &Path,
    rows: usize,
    elapsed: Option<std::time::Duration>,
) {
    match elapsed {
        Some(duration) => log::info!(
            "Successfully {operation} {rows} rows to {} in {duration:?}",
            path.display()
        ),
        None => log::info!("Successfully {operation} {rows} rows to {}", path.display()),
    }
}
