//! Date helpers for bill display.
//!
//! Stored bill dates are plain `YYYY-MM-DD` strings. Display uses the short
//! French form the bills table has always shown, e.g. `4 Avr. 04`.

use chrono::{Datelike, NaiveDate};

use crate::errors::FormatError;

/// Parse a strict `YYYY-MM-DD` string into a calendar date.
///
/// Anything with a different shape (`2004-4-4`, `23 javnier 2004`, an
/// RFC 3339 timestamp) or an impossible day (`2021-02-30`) yields `None`.
pub fn parse_date_string(date_str: &str) -> Option<NaiveDate> {
    let bytes = date_str.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }

    let year = date_str[0..4].parse::<i32>().ok()?;
    let month = date_str[5..7].parse::<u32>().ok()?;
    let day = date_str[8..10].parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Capitalized three-letter French month abbreviation
fn french_short_month(month: u32) -> &'static str {
    match month {
        1 => "Jan", 2 => "Fév", 3 => "Mar", 4 => "Avr",
        5 => "Mai", 6 => "Jui", 7 => "Jui", 8 => "Aoû",
        9 => "Sep", 10 => "Oct", 11 => "Nov", 12 => "Déc",
        _ => "???",
    }
}

/// Format a stored date, failing on anything that is not a real `YYYY-MM-DD` date
pub fn try_format_date(date_str: &str) -> Result<String, FormatError> {
    let date = parse_date_string(date_str)
        .ok_or_else(|| FormatError::MalformedDate(date_str.to_string()))?;
    Ok(format!(
        "{} {}. {:02}",
        date.day(),
        french_short_month(date.month()),
        date.year().rem_euclid(100)
    ))
}

/// Format a stored date for display, falling back to the original string
pub fn format_date(date_str: &str) -> String {
    try_format_date(date_str).unwrap_or_else(|_| date_str.to_string())
}
