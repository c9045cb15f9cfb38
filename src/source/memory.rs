//! In-memory admission source

use chrono::NaiveDate;
use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::models::AdmissionRecord;
use crate::source::AdmissionSource;

/// Admission source backed by vectors already held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    admissions: Vec<AdmissionRecord>,
    names: FxHashMap<String, String>,
}

impl MemorySource {
    /// Create an empty source
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source from a list of admissions
    #[must_use]
    pub fn with_admissions(admissions: Vec<AdmissionRecord>) -> Self {
        Self {
            admissions,
            names: FxHashMap::default(),
        }
    }

    /// Add an admission
    pub fn add_admission(&mut self, admission: AdmissionRecord) {
        self.admissions.push(admission);
    }

    /// Register a participant's display name
    pub fn add_participant(&mut self, member_id: impl Into<String>, name: impl Into<String>) {
        self.names.insert(member_id.into(), name.into());
    }
}

impl AdmissionSource for MemorySource {
    fn admissions_overlapping(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AdmissionRecord>> {
        Ok(self
            .admissions
            .iter()
            .filter(|a| a.admission_date <= end && a.discharge_date >= start)
            .cloned()
            .collect())
    }

    fn member_history(&self, member_id: &str) -> Result<Vec<AdmissionRecord>> {
        Ok(self
            .admissions
            .iter()
            .filter(|a| a.member_id == member_id)
            .cloned()
            .collect())
    }

    fn participant_name(&self, member_id: &str) -> Result<Option<String>> {
        Ok(self.names.get(member_id).cloned())
    }
}
