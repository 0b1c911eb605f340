use chrono::{DateTime, FixedOffset, NaiveDate};
use indexmap::IndexMap;

/// Header row every cookie log must start with, in this exact order.
pub const EXPECTED_HEADERS: [&str; 2] = ["cookie", "timestamp"];

/// Timestamp layout of a log row, e.g. `2018-12-09T14:19:00+00:00`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Layout of the target date, e.g. `2018-12-09`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Cookie -> number of occurrences on the target date.
/// Iteration order is the order in which cookies were first seen.
pub type FrequencyMap = IndexMap<String, u64>;

/// One unparsed line of a log source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line number; line 1 is the header
    pub line: usize,
    pub fields: Vec<String>,
}

impl RawRow {
    pub fn new(line: usize, fields: Vec<String>) -> Self {
        Self { line, fields }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieRecord {
    pub cookie: String,
    pub timestamp: DateTime<FixedOffset>,
}

impl CookieRecord {
    /// Calendar date as written in the log, ignoring time of day and offset.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}
