//! Shared fixtures for the integration tests

#![allow(dead_code)]

use std::path::Path;

use chrono::NaiveDate;
use hospital_trends::algorithm::utilization::SUMMARY_ROW_LABELS;
use hospital_trends::models::long_stay::LONG_STAY_COLUMNS;
use hospital_trends::{AdmissionCategory, AdmissionRecord, CsvTable, ReportConfig};
use rusqlite::{Connection, params};

/// Shorthand for a calendar date
#[must_use]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// An acute stay at the default test hospital
#[must_use]
pub fn acute(member: &str, admitted: NaiveDate, discharged: NaiveDate) -> AdmissionRecord {
    AdmissionRecord::new(member, admitted, discharged, "Miriam Hospital", AdmissionCategory::Acute)
}

/// A psychiatric stay at the default test facility
#[must_use]
pub fn psych(member: &str, admitted: NaiveDate, discharged: NaiveDate) -> AdmissionRecord {
    AdmissionRecord::new(member, admitted, discharged, "Butler Hospital", AdmissionCategory::Psychiatric)
}

/// The March 2019 reference set: acute stays of 2, 9 and 4 days (the 9-day one
/// admitted on a Saturday) and a 10-day psychiatric stay, all distinct members,
/// plus stays that must not be counted in March
#[must_use]
pub fn march_2019_admissions() -> Vec<AdmissionRecord> {
    vec![
        acute("101", date(2019, 3, 4), date(2019, 3, 6)),
        acute("102", date(2019, 3, 9), date(2019, 3, 18)),
        acute("103", date(2019, 3, 12), date(2019, 3, 16)),
        psych("104", date(2019, 3, 13), date(2019, 3, 23)),
        // discharged in April
        acute("105", date(2019, 3, 28), date(2019, 4, 2)),
        // discharged in February
        acute("106", date(2019, 2, 20), date(2019, 2, 28)),
        // not an inpatient category
        AdmissionRecord::new("107", date(2019, 3, 5), date(2019, 3, 6), "Kent Hospital", AdmissionCategory::Other),
        // history for the look-back: about 5 months and 7 months before the long stay
        acute("102", date(2018, 10, 15), date(2018, 10, 18)),
        acute("102", date(2018, 8, 9), date(2018, 8, 12)),
    ]
}

/// Write a SQLite reporting database holding `admissions` and participant names
pub fn write_database(path: &Path, admissions: &[AdmissionRecord], names: &[(&str, &str, &str)]) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(
        "CREATE TABLE inpatient (
            member_id INTEGER, admission_date TEXT, discharge_date TEXT,
            los INTEGER, facility TEXT, admission_type TEXT
         );
         CREATE TABLE ppts (member_id INTEGER PRIMARY KEY, first TEXT, last TEXT);",
    )
    .unwrap();

    for a in admissions {
        let admission_type = match a.category {
            AdmissionCategory::Acute => "Acute Hospital",
            AdmissionCategory::Psychiatric => "Psych Unit / Facility",
            AdmissionCategory::Other => "Observation",
        };
        conn.execute(
            "INSERT INTO inpatient VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                a.member_id.parse::<i64>().unwrap(),
                a.admission_date.to_string(),
                a.discharge_date.to_string(),
                a.los,
                a.facility,
                admission_type
            ],
        )
        .unwrap();
    }

    for (member, first, last) in names {
        conn.execute(
            "INSERT INTO ppts VALUES (?1, ?2, ?3)",
            params![member.parse::<i64>().unwrap(), first, last],
        )
        .unwrap();
    }
}

/// Trend table with one earlier month already filled in
#[must_use]
pub fn baseline_trends() -> CsvTable {
    let mut table = CsvTable::new(["Metric", "Feb_2019"]);
    for (label, value) in SUMMARY_ROW_LABELS.iter().zip(["16/14/7", "64", "3", "4.00"]) {
        table.push_row(vec![(*label).to_string(), value.to_string()]);
    }
    table
}

/// Long-stay log with one earlier section
#[must_use]
pub fn baseline_long_stays() -> CsvTable {
    let mut table = CsvTable::new(LONG_STAY_COLUMNS);
    table.push_row(vec!["In Feb 2019".to_string()]);
    table.push_row(
        ["Grace Hopper", "02/01-02/12", "11", "Kent Hospital", "N", "0"]
            .map(String::from)
            .to_vec(),
    );
    table
}

/// Lay out a working directory with a database and both baseline tables
pub fn setup_workspace(dir: &Path, admissions: &[AdmissionRecord]) -> ReportConfig {
    let database = dir.join("reporting.db");
    write_database(
        &database,
        admissions,
        &[("101", "Ada", "Lovelace"), ("102", "Alan", "Turing"), ("104", "Edsger", "Dijkstra")],
    );

    let trends = dir.join("hospital_trends.csv");
    let long_stays = dir.join("long_stays.csv");
    baseline_trends().write(&trends).unwrap();
    baseline_long_stays().write(&long_stays).unwrap();

    ReportConfig::new()
        .with_database(database)
        .with_tables(trends, long_stays)
}
