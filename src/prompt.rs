//! Interactive reporting-month prompt
//!
//! Asks for `MM/YYYY` and re-asks on bad answers, up to a fixed number of
//! attempts. Generic over the reader and writer so it can run against a
//! terminal or a test buffer.

use std::io::{BufRead, Write};

use crate::error::{ReportError, Result};
use crate::models::ReportingPeriod;

/// Attempts before the prompt gives up
pub const MAX_PROMPT_ATTEMPTS: usize = 3;

const PROMPT_TEXT: &str = "Enter the reporting month as a number with year (12/2018): ";

/// Ask for a reporting month until a valid one is given
pub fn prompt_for_period<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    max_attempts: usize,
) -> Result<ReportingPeriod> {
    for attempt in 1..=max_attempts {
        write!(output, "{PROMPT_TEXT}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(ReportError::invalid_input("No reporting month given (end of input)"));
        }

        match parse_month_answer(&line) {
            Ok(period) => return Ok(period),
            Err(e) => {
                log::debug!("Rejected prompt answer {attempt}/{max_attempts}: {e}");
                writeln!(output, "{e}")?;
            }
        }
    }

    Err(ReportError::PromptExhausted {
        attempts: max_attempts,
    })
}

/// Parse a `MM/YYYY` answer
pub fn parse_month_answer(answer: &str) -> Result<ReportingPeriod> {
    let answer = answer.trim();
    if !answer.contains('/') {
        return Err(ReportError::invalid_input(format!(
            "'{answer}' is not in MM/YYYY form"
        )));
    }
    answer.parse()
}
