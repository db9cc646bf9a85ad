use chrono::{Duration, NaiveDate};

use crate::error::{ClimateError, Result};
use crate::utils::constants::{DATE_FORMAT, TRAILING_WINDOW_DAYS};

/// Parse a fixed-width `YYYY-MM-DD` date string.
///
/// Rejects shorter forms chrono would otherwise accept (e.g. "2017-8-2"),
/// since lexical date ordering relies on all ten characters being present.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    if value.len() != 10 {
        return Err(ClimateError::InvalidFormat(format!(
            "Date '{}' is not fixed-width YYYY-MM-DD",
            value
        )));
    }
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT)?;

    Ok(date)
}

pub fn is_iso_date(value: &str) -> bool {
    value.len() == 10 && NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok()
}

/// Calendar subtraction of 365 days, formatted back to `YYYY-MM-DD`.
///
/// This is day-count arithmetic, not calendar-year arithmetic: crossing a
/// leap year shifts the day-of-year by one, which is accepted.
pub fn one_year_before(date: &str) -> Result<String> {
    let parsed = parse_iso_date(date)?;
    let shifted = parsed - Duration::days(TRAILING_WINDOW_DAYS);

    Ok(shifted.format(DATE_FORMAT).to_string())
}
