//! Console output utilities
//!
//! Operator-facing summary printed after a report run.

use crate::algorithm::UtilizationReport;

/// Render the report the way it is printed at the end of a run
#[must_use]
pub fn format_report(report: &UtilizationReport) -> String {
    let mut out = report.summary.generate_summary(&report.period);

    if report.long_stays.is_empty() {
        out.push_str("\nNo long stays.\n");
        return out;
    }

    out.push_str(&format!("\nLong Stays ({}):\n", report.long_stays.len()));
    for entry in &report.long_stays {
        out.push_str(&format!(
            "  {:<24} {:<11} {:>3} days  {:<24} psych={}  prior 6 mo={}\n",
            entry.name,
            entry.dates,
            entry.days,
            entry.hospital,
            entry.psych_flag(),
            entry.prior_stays
        ));
    }
    out
}

/// Print the report summary to stdout
pub fn print_report(report: &UtilizationReport) {
    print!("{}", format_report(report));
}
