//! Long-stay identification and enrichment
//!
//! Long stays are listed with the member's name and the number of admissions
//! the member had in the look-back window before the stay. The look-back uses
//! the member's full history, not just the stays of the reporting period.

use chrono::{Duration, NaiveDate};
use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::models::{AdmissionCategory, AdmissionRecord, LongStayEntry};
use crate::source::AdmissionSource;

/// Placeholder shown for members missing from the participant lookup
#[must_use]
pub fn placeholder_name(member_id: &str) -> String {
    format!("Unknown member {member_id}")
}

/// Inclusive look-back window ending the day before `admission_date`
///
/// A window reaching past the earliest representable date is clamped to it.
#[must_use]
pub fn lookback_window(admission_date: NaiveDate, lookback_days: i64) -> (NaiveDate, NaiveDate) {
    let start = Duration::try_days(lookback_days)
        .and_then(|span| admission_date.checked_sub_signed(span))
        .unwrap_or(NaiveDate::MIN);
    let end = admission_date.pred_opt().unwrap_or(NaiveDate::MIN);
    (start, end)
}

/// Count reported admissions of `history` inside the look-back window of `stay`
///
/// The stay itself is never counted because the window ends the day before its
/// admission.
#[must_use]
pub fn count_prior_admissions(
    history: &[AdmissionRecord],
    stay: &AdmissionRecord,
    lookback_days: i64,
) -> usize {
    let (start, end) = lookback_window(stay.admission_date, lookback_days);
    history
        .iter()
        .filter(|a| a.member_id == stay.member_id)
        .filter(|a| a.category.is_reported())
        .filter(|a| start <= a.admission_date && a.admission_date <= end)
        .count()
}

/// Stays at or above the threshold, acute first then psychiatric
///
/// Within a category stays are ordered by admission date, then member id.
#[must_use]
pub fn select_long_stays<'a>(
    stays: &[&'a AdmissionRecord],
    long_stay_days: i64,
) -> Vec<&'a AdmissionRecord> {
    stays
        .iter()
        .copied()
        .filter(|s| s.is_long_stay(long_stay_days))
        .sorted_by(|a, b| {
            let rank = |r: &AdmissionRecord| u8::from(r.category == AdmissionCategory::Psychiatric);
            rank(a)
                .cmp(&rank(b))
                .then(a.admission_date.cmp(&b.admission_date))
                .then(a.member_id.cmp(&b.member_id))
        })
        .collect()
}

/// Builds `LongStayEntry` rows, caching per-member lookups
pub struct LongStayEnricher<'s, S: AdmissionSource + ?Sized> {
    source: &'s S,
    long_stay_days: i64,
    lookback_days: i64,
    histories: FxHashMap<String, Vec<AdmissionRecord>>,
    names: FxHashMap<String, String>,
}

impl<'s, S: AdmissionSource + ?Sized> LongStayEnricher<'s, S> {
    /// Create an enricher over a source
    pub fn new(source: &'s S, long_stay_days: i64, lookback_days: i64) -> Self {
        Self {
            source,
            long_stay_days,
            lookback_days,
            histories: FxHashMap::default(),
            names: FxHashMap::default(),
        }
    }

    /// Enrich every long stay among `stays`
    pub fn enrich(&mut self, stays: &[&AdmissionRecord]) -> Result<Vec<LongStayEntry>> {
        let long_stays = select_long_stays(stays, self.long_stay_days);
        log::info!("Enriching {} long stays", long_stays.len());

        long_stays
            .into_iter()
            .map(|stay| self.enrich_one(stay))
            .collect()
    }

    fn enrich_one(&mut self, stay: &AdmissionRecord) -> Result<LongStayEntry> {
        let name = self.display_name(&stay.member_id)?;
        let lookback_days = self.lookback_days;
        let history = self.history(&stay.member_id)?;
        let prior_stays = count_prior_admissions(history, stay, lookback_days);

        Ok(LongStayEntry {
            member_id: stay.member_id.clone(),
            name,
            dates: stay.date_range_label(),
            days: stay.los,
            hospital: stay.facility.clone(),
            psych_stay: stay.category == AdmissionCategory::Psychiatric,
            prior_stays,
        })
    }

    fn display_name(&mut self, member_id: &str) -> Result<String> {
        if let Some(name) = self.names.get(member_id) {
            return Ok(name.clone());
        }

        let name = match self.source.participant_name(member_id)? {
            Some(name) => name,
            None => {
                log::warn!("Member {member_id} not found in participant lookup, using placeholder name");
                placeholder_name(member_id)
            }
        };
        self.names.insert(member_id.to_string(), name.clone());
        Ok(name)
    }

    fn history(&mut self, member_id: &str) -> Result<&[AdmissionRecord]> {
        if !self.histories.contains_key(member_id) {
            let history = self.source.member_history(member_id)?;
            log::debug!("Loaded {} admissions for member {member_id}", history.len());
            self.histories.insert(member_id.to_string(), history);
        }
        Ok(self
            .histories
            .get(member_id)
            .map(Vec::as_slice)
            .unwrap_or_default())
    }
}
