use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::domain::{DATE_FORMAT, TIMESTAMP_FORMAT};
use crate::error::CookieLogError;
use crate::ports::Result;

const DATE_LEN: usize = 10;
const TIMESTAMP_LEN: usize = 25;

/// Non-digit bytes of `YYYY-MM-DDTHH:MM:SS+HH:MM` by position; `+` also stands for `-`.
const TIMESTAMP_SEPARATORS: [(usize, u8); 7] = [
    (4, b'-'),
    (7, b'-'),
    (10, b'T'),
    (13, b':'),
    (16, b':'),
    (19, b'+'),
    (22, b':'),
];

/// Parses a target date given as `YYYY-MM-DD`.
/// Anything else (short fields, trailing text, impossible dates) is rejected.
pub fn parse_target_date(value: &str) -> Result<NaiveDate> {
    let invalid = || CookieLogError::InvalidDate {
        value: value.to_string(),
    };
    if value.len() != DATE_LEN {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

/// Parses a log timestamp such as `2018-12-09T14:19:00+00:00`.
/// Returns `None` if the value is not exactly in that layout.
pub fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    if !has_timestamp_layout(value) {
        return None;
    }
    DateTime::parse_from_str(value, TIMESTAMP_FORMAT).ok()
}

/// chrono tolerates whitespace around the offset, so the shape is checked byte by byte first.
fn has_timestamp_layout(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != TIMESTAMP_LEN {
        return false;
    }
    bytes.iter().enumerate().all(|(idx, &byte)| {
        match TIMESTAMP_SEPARATORS.iter().find(|(pos, _)| *pos == idx) {
            Some((_, b'+')) => byte == b'+' || byte == b'-',
            Some((_, sep)) => byte == *sep,
            None => byte.is_ascii_digit(),
        }
    })
}

/// Checks a header row against the expected names: same count, same order, same case.
pub fn validate_headers(headers: &[String], expected: &[&str]) -> Result<()> {
    let matches = headers.len() == expected.len()
        && headers.iter().zip(expected).all(|(header, want)| header == want);
    if matches {
        Ok(())
    } else {
        Err(CookieLogError::InvalidHeaders {
            found: headers.to_vec(),
        })
    }
}
