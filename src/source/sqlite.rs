//! SQLite admission source
//!
//! Reads the `inpatient` and `ppts` tables of the reporting database. The
//! database path is passed in explicitly; nothing here knows where the
//! production file lives.

use chrono::NaiveDate;
use rusqlite::{Connection, OpenFlags, Params, params};
use std::io;
use std::path::Path;

use crate::error::{ReportError, Result};
use crate::models::{AdmissionCategory, AdmissionRecord};
use crate::source::AdmissionSource;
use crate::utils::date_utils::parse_date_string;

const ADMISSION_COLUMNS: &str = "CAST(member_id AS TEXT), admission_date, discharge_date, los, facility, admission_type";

/// Raw row as stored, before date parsing
struct InpatientRow {
    member_id: Option<String>,
    admission_date: Option<String>,
    discharge_date: Option<String>,
    los: Option<f64>,
    facility: Option<String>,
    admission_type: Option<String>,
}

/// Admission source over a SQLite reporting database
pub struct SqliteSource {
    conn: Connection,
}

impl SqliteSource {
    /// Open an existing database read-only
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ReportError::io(
                path,
                "Admissions database not found",
                io::Error::from(io::ErrorKind::NotFound),
            ));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        log::info!("Opened admissions database {}", path.display());
        Ok(Self { conn })
    }

    /// Wrap an already open connection
    #[must_use]
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    fn query_admissions<P: Params>(&self, sql: &str, params: P) -> Result<Vec<AdmissionRecord>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, |row| {
            Ok(InpatientRow {
                member_id: row.get(0)?,
                admission_date: row.get(1)?,
                discharge_date: row.get(2)?,
                los: row.get(3)?,
                facility: row.get(4)?,
                admission_type: row.get(5)?,
            })
        })?;

        let mut admissions = Vec::new();
        let mut skipped = 0usize;
        for row in rows {
            match to_admission(row?) {
                Some(admission) => admissions.push(admission),
                None => skipped += 1,
            }
        }

        admissions.sort_by(|a, b| {
            a.admission_date
                .cmp(&b.admission_date)
                .then_with(|| a.member_id.cmp(&b.member_id))
        });

        if skipped > 0 {
            log::warn!("Skipped {skipped} inpatient rows with missing member or unparseable dates");
        }
        log::debug!("Loaded {} admissions", admissions.len());
        Ok(admissions)
    }
}

fn to_admission(row: InpatientRow) -> Option<AdmissionRecord> {
    let member_id = row.member_id.filter(|m| !m.trim().is_empty())?;
    let admission_date = row.admission_date.as_deref().and_then(parse_date_string)?;
    let discharge_date = row.discharge_date.as_deref().and_then(parse_date_string)?;
    let category = row
        .admission_type
        .as_deref()
        .map_or(AdmissionCategory::Other, AdmissionCategory::from);

    let record = AdmissionRecord::new(
        member_id.trim(),
        admission_date,
        discharge_date,
        row.facility.unwrap_or_default(),
        category,
    );

    // Recorded LOS wins over the derived one when present
    Some(match row.los {
        Some(los) if los.is_finite() => record.with_los(los.round() as i64),
        _ => record,
    })
}

impl AdmissionSource for SqliteSource {
    fn admissions_overlapping(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AdmissionRecord>> {
        // Dates are stored in several text formats, so the window is applied
        // after parsing rather than with SQLite's date()
        let sql = format!(
            "SELECT {ADMISSION_COLUMNS} FROM inpatient
             WHERE discharge_date IS NOT NULL"
        );
        let admissions = self.query_admissions(&sql, [])?;
        Ok(admissions
            .into_iter()
            .filter(|a| a.admission_date <= end && a.discharge_date >= start)
            .collect())
    }

    fn member_history(&self, member_id: &str) -> Result<Vec<AdmissionRecord>> {
        let sql = format!(
            "SELECT {ADMISSION_COLUMNS} FROM inpatient
             WHERE CAST(member_id AS TEXT) = ?1"
        );
        self.query_admissions(&sql, params![member_id])
    }

    fn participant_name(&self, member_id: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT first, last FROM ppts WHERE CAST(member_id AS TEXT) = ?1")?;
        let mut rows = stmt.query(params![member_id])?;

        let Some(row) = rows.next()? else {
            return Ok(None);
        };
        let first: Option<String> = row.get(0)?;
        let last: Option<String> = row.get(1)?;

        let name = [first, last]
            .into_iter()
            .flatten()
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(if name.is_empty() { None } else { Some(name) })
    }
}
