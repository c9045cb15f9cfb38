//! CSV table snapshots
//!
//! Both persisted reports are small, human-edited CSV files. They are read
//! whole into a `CsvTable`, changed in memory and written back whole.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::util::{safe_create_file, safe_open_file};
use crate::error::{ReportError, Result};

/// A header row plus string cells, every row padded to the header width
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Create an empty table with the given headers
    #[must_use]
    pub fn new<I, T>(headers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Read a table from disk; a missing file is an error
    pub fn read(path: &Path) -> Result<Self> {
        let file = safe_open_file(path, "reading report table")?;
        let table = Self::from_reader(file).map_err(|e| ReportError::csv(path, e))?;
        log::debug!(
            "Read {} rows x {} columns from {}",
            table.rows.len(),
            table.headers.len(),
            path.display()
        );
        Ok(table)
    }

    /// Parse a table from any reader
    pub fn from_reader<R: io::Read>(reader: R) -> std::result::Result<Self, csv::Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
        let mut table = Self::new(headers);
        for record in csv_reader.records() {
            let record = record?;
            table.push_row(record.iter().map(str::to_string).collect());
        }
        Ok(table)
    }

    /// Write the whole table, replacing the file
    ///
    /// The table is written to a sibling temporary file first and renamed over
    /// the target, so a failed write leaves the previous snapshot in place.
    pub fn write(&self, path: &Path) -> Result<()> {
        let tmp_path = path.with_extension("csv.tmp");
        let file = safe_create_file(&tmp_path, "writing report table")?;
        {
            let mut writer = csv::WriterBuilder::new().flexible(false).from_writer(file);
            self.write_records(&mut writer)
                .map_err(|e| ReportError::csv(path, e))?;
            writer
                .flush()
                .map_err(|e| ReportError::io(&tmp_path, "Failed to flush report table", e))?;
        }
        fs::rename(&tmp_path, path)
            .map_err(|e| ReportError::io(path, "Failed to replace report table", e))?;
        log::debug!("Wrote {} rows to {}", self.rows.len(), path.display());
        Ok(())
    }

    fn write_records<W: io::Write>(&self, writer: &mut csv::Writer<W>) -> std::result::Result<(), csv::Error> {
        if !self.headers.is_empty() {
            writer.write_record(&self.headers)?;
        }
        for row in &self.rows {
            writer.write_record(row)?;
        }
        Ok(())
    }

    /// Column headers
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no header row
    #[must_use]
    pub fn has_headers(&self) -> bool {
        !self.headers.is_empty()
    }

    /// Index of a column by exact header name
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell value, `None` outside the table
    #[must_use]
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(idx)).map(String::as_str)
    }

    /// All values of a column
    #[must_use]
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|r| r[idx].as_str()).collect())
    }

    /// Append a row, padded or truncated to the header width
    pub fn push_row(&mut self, row: Vec<String>) {
        let row = self.fit_row(row);
        self.rows.push(row);
    }

    /// Insert rows before the existing ones, keeping their order
    pub fn prepend_rows(&mut self, rows: Vec<Vec<String>>) {
        let fitted: Vec<Vec<String>> = rows.into_iter().map(|r| self.fit_row(r)).collect();
        self.rows.splice(0..0, fitted);
    }

    /// Overwrite a column in place, or append it when absent
    ///
    /// Rows without a value receive an empty cell.
    pub fn set_column(&mut self, name: &str, values: &[String]) {
        let idx = match self.column_index(name) {
            Some(idx) => idx,
            None => {
                self.headers.push(name.to_string());
                for row in &mut self.rows {
                    row.push(String::new());
                }
                self.headers.len() - 1
            }
        };

        for (i, row) in self.rows.iter_mut().enumerate() {
            row[idx] = values.get(i).cloned().unwrap_or_default();
        }
    }

    fn fit_row(&self, mut row: Vec<String>) -> Vec<String> {
        let width = self.headers.len();
        if row.len() > width && row[width..].iter().any(|c| !c.trim().is_empty()) {
            log::warn!(
                "Dropping {} extra cells from a row wider than the {width} table columns",
                row.len() - width
            );
        }
        row.resize(width, String::new());
        row
    }
}
