//! Permissive parsing of Diarium entry dates.
//!
//! Diarium writes local date-times whose fractional seconds are not always six
//! digits long (`2010-10-26T15:47:53.48828`). The standard shapes are tried
//! first, including the shorter ISO forms down to a bare date; when all of them
//! fail the fraction is padded or truncated to exactly six digits and parsed
//! again.

use crate::constants;
use crate::errors::TimestampError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

const STANDARD_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const STANDARD_FORMAT_SPACED: &str = "%Y-%m-%d %H:%M:%S%.f";
const MINUTE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];
const DATE_FORMAT: &str = "%Y-%m-%d";
const MICROSECOND_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
const MICROSECOND_DIGITS: usize = 6;

/// Parses an entry date into its wall-clock date-time.
///
/// Accepted shapes, in order:
/// 1. `YYYY-MM-DDTHH:MM:SS[.fraction]` (a space may replace the `T`)
/// 2. RFC 3339 with an offset; the offset is dropped and the wall-clock time kept
/// 3. `YYYY-MM-DDTHH:MM`, `YYYY-MM-DDTHH` and `YYYY-MM-DD`; missing parts are zero
/// 4. anything whose text after the first `.` becomes a valid six-digit fraction
///    once padded with zeros or cut to six characters
///
/// # Errors
///
/// Returns a [`TimestampError`] carrying the error of the first attempt when no
/// shape matches.
///
/// # Examples
///
/// ```
/// use diarium2dayone::journal_core::timestamp::{parse_entry_timestamp, format_dayone_timestamp};
///
/// let parsed = parse_entry_timestamp("2010-10-26T15:47:53.48828").unwrap();
/// assert_eq!(format_dayone_timestamp(&parsed), "2010-10-26T15:47:53Z");
/// ```
pub fn parse_entry_timestamp(input: &str) -> Result<NaiveDateTime, TimestampError> {
    let primary = match NaiveDateTime::parse_from_str(input, STANDARD_FORMAT) {
        Ok(parsed) => return Ok(parsed),
        Err(e) => e,
    };

    if let Ok(parsed) = NaiveDateTime::parse_from_str(input, STANDARD_FORMAT_SPACED) {
        return Ok(parsed);
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Ok(parsed.naive_local());
    }

    if let Some(parsed) = parse_short_form(input) {
        return Ok(parsed);
    }

    parse_with_padded_fraction(input).ok_or_else(|| TimestampError {
        input: input.to_string(),
        source: primary,
    })
}

fn parse_short_form(input: &str) -> Option<NaiveDateTime> {
    if let Some(parsed) = MINUTE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
    {
        return Some(parsed);
    }

    match input.split_once(|c| c == 'T' || c == ' ') {
        Some((date, hour)) => {
            if hour.len() != 2 || !hour.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let date = NaiveDate::parse_from_str(date, DATE_FORMAT).ok()?;
            date.and_hms_opt(hour.parse().ok()?, 0, 0)
        }
        None => NaiveDate::parse_from_str(input, DATE_FORMAT)
            .ok()?
            .and_hms_opt(0, 0, 0),
    }
}

fn parse_with_padded_fraction(input: &str) -> Option<NaiveDateTime> {
    let (base, fraction) = input.split_once('.')?;
    let fraction: String = fraction
        .chars()
        .chain(std::iter::repeat('0'))
        .take(MICROSECOND_DIGITS)
        .collect();

    NaiveDateTime::parse_from_str(&format!("{}.{}", base, fraction), MICROSECOND_FORMAT).ok()
}

/// Formats a date-time the way Day One stores entry dates (`...T15:47:53Z`).
///
/// Sub-second precision is dropped.
pub fn format_dayone_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp
        .format(constants::DAYONE_TIMESTAMP_FORMAT)
        .to_string()
}
