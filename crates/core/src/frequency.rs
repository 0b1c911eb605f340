//! Frequency extraction over a log sorted by timestamp, newest first.

use chrono::NaiveDate;

use crate::domain::{CookieRecord, FrequencyMap, RawRow, EXPECTED_HEADERS};
use crate::error::CookieLogError;
use crate::ports::Result;
use crate::utils::{parse_timestamp, validate_headers};

/// Counts how often each cookie occurs on `target_date`.
///
/// The first row must be the `cookie,timestamp` header. Data rows are
/// expected in non-increasing timestamp order: rows newer than the target
/// date are skipped, and the scan stops at the first row older than it, so
/// nothing past that point is read or parsed. Unsorted input may under-count.
///
/// Any IO error, bad header, or malformed row aborts the scan; no partial
/// map is returned.
pub fn extract<I>(rows: I, target_date: NaiveDate) -> Result<FrequencyMap>
where
    I: IntoIterator<Item = Result<RawRow>>,
{
    let mut rows = rows.into_iter();

    let header = rows
        .next()
        .transpose()?
        .ok_or(CookieLogError::InvalidHeaders { found: Vec::new() })?;
    validate_headers(&header.fields, &EXPECTED_HEADERS)?;

    let mut freqs = FrequencyMap::new();
    for row in rows {
        let record = parse_record(&row?)?;
        let date = record.date();
        if date == target_date {
            *freqs.entry(record.cookie).or_insert(0) += 1;
        } else if date < target_date {
            break;
        }
    }

    Ok(freqs)
}

/// Turns a raw data row into a record, rejecting wrong field counts and bad timestamps.
pub fn parse_record(row: &RawRow) -> Result<CookieRecord> {
    let [cookie, timestamp] = row.fields.as_slice() else {
        return Err(CookieLogError::MalformedRecord {
            line: row.line,
            reason: format!(
                "expected {} fields, found {}",
                EXPECTED_HEADERS.len(),
                row.fields.len()
            ),
        });
    };

    let timestamp = parse_timestamp(timestamp).ok_or_else(|| CookieLogError::MalformedRecord {
        line: row.line,
        reason: format!(
            "timestamp '{timestamp}' is not in the format 'YYYY-MM-DDTHH:MM:SS+HH:MM'"
        ),
    })?;

    Ok(CookieRecord {
        cookie: cookie.clone(),
        timestamp,
    })
}
