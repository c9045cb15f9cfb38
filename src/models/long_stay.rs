//! Long-stay log entries

/// Column headers of the long-stay log, in output order
pub const LONG_STAY_COLUMNS: [&str; 6] = [
    "Name",
    "Dates",
    "Days",
    "Hospital",
    "Psych. stay Y=Yes",
    "Number of hospital stays, including psych. stays, during the 6 months preceding the stay OR since enrollment if enrolled < 6 months when hospitalized",
];

/// One enriched long stay, ready to be written to the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongStayEntry {
    /// Member identifier the entry was built from
    pub member_id: String,
    /// Display name, or a placeholder when the member could not be found
    pub name: String,
    /// Date range formatted as `MM/DD-MM/DD`
    pub dates: String,
    /// Length of stay in days
    pub days: i64,
    /// Facility name
    pub hospital: String,
    /// Whether the stay was psychiatric
    pub psych_stay: bool,
    /// Admissions in the look-back window before this stay
    pub prior_stays: usize,
}

impl LongStayEntry {
    /// Cell values in `LONG_STAY_COLUMNS` order
    #[must_use]
    pub fn to_cells(&self) -> [String; 6] {
        [
            self.name.clone(),
            self.dates.clone(),
            self.days.to_string(),
            self.hospital.clone(),
            self.psych_flag().to_string(),
            self.prior_stays.to_string(),
        ]
    }

    /// `Y`/`N` flag for the psychiatric stay column
    #[must_use]
    pub fn psych_flag(&self) -> &'static str {
        if self.psych_stay { "Y" } else { "N" }
    }

    /// Value for a named log column, `None` for columns this entry does not fill
    #[must_use]
    pub fn cell(&self, column: &str) -> Option<String> {
        LONG_STAY_COLUMNS
            .iter()
            .position(|c| c.eq_ignore_ascii_case(column.trim()))
            .map(|idx| self.to_cells()[idx].clone())
    }
}
