//! Utility functions for error handling
//!
//! File helpers that attach the path and purpose to every failure, so a
//! missing trend table is reported instead of silently replaced.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{ReportError, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(ReportError::io(
            path,
            format!("File not found, needed for: {purpose}"),
            io::Error::from(io::ErrorKind::NotFound),
        ));
    }

    if !path.is_file() {
        return Err(ReportError::io(
            path,
            format!("Path is not a file, expected a file for: {purpose}"),
            io::Error::from(io::ErrorKind::InvalidInput),
        ));
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => "Permission denied - check file permissions".to_string(),
            _ => format!("Failed to open file for: {purpose}"),
        };
        ReportError::io(path, context, e)
    })
}

/// Create or truncate a file for writing with rich error information
pub fn safe_create_file(path: &Path, purpose: &str) -> Result<fs::File> {
    fs::File::create(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - is the file open in another program?".to_string()
            }
            _ => format!("Failed to write file for: {purpose}"),
        };
        ReportError::io(path, context, e)
    })
}

/// Safely read a file to string with rich error information
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    let mut file = safe_open_file(path, purpose)?;

    let mut content = String::new();
    match io::Read::read_to_string(&mut file, &mut content) {
        Ok(_) => Ok(content),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::InvalidData => {
                    "File contains invalid UTF-8 data - cannot read as text".to_string()
                }
                _ => format!("Failed to read file content for: {purpose}"),
            };
            Err(ReportError::io(path, context, e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hospital_trends.csv");

        let err = safe_open_file(&path, "trend table").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("hospital_trends.csv"));
        assert!(message.contains("trend table"));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = safe_open_file(dir.path(), "long-stay log").unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }

    #[test]
    fn test_read_to_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "lookback_days = 90\n").unwrap();

        let content = safe_read_to_string(&path, "configuration").unwrap();
        assert_eq!(content, "lookback_days = 90\n");
    }
}
