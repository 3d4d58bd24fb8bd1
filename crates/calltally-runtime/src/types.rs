//! Typed shapes for call-log and event-log API responses.

use calltally_core::parse_leading_int;
use serde::Deserialize;
use serde_json::Value;

/// Minimum `start_time` length carrying a full date+time representation;
/// shorter records are skipped from aggregation. A raw length bound, not
/// a parsed-date validation.
pub const FULL_TIMESTAMP_MIN_LEN: usize = 27;

/// One page of the paginated call-log response.
///
/// `calls` is structurally required; the records inside are kept raw and
/// decoded individually, so one malformed record skips itself rather
/// than failing the page.
#[derive(Debug, Deserialize)]
pub struct CallLogPage {
    pub calls: Vec<Value>,
    #[serde(default)]
    pub next_page_uri: Option<String>,
}

impl CallLogPage {
    /// Cursor for the next page; absence (or a blank value) terminates
    /// the walk.
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_page_uri
            .as_deref()
            .map(str::trim)
            .filter(|uri| !uri.is_empty())
    }
}

/// One call record. All six fields are required; a record missing any of
/// them fails decode as a unit and is skipped whole.
#[derive(Debug, Clone, Deserialize)]
pub struct CallRecord {
    pub sid: String,
    pub from_formatted: String,
    pub to_formatted: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
}

impl CallRecord {
    /// True when the raw start timestamp is long enough to carry a full
    /// date+time representation.
    pub fn has_full_start_timestamp(&self) -> bool {
        self.start_time.len() >= FULL_TIMESTAMP_MIN_LEN
    }

    /// Day of month read from byte positions 5-6 of the start timestamp;
    /// 0 when those positions are absent or non-numeric.
    pub fn start_day(&self) -> i32 {
        self.start_time
            .get(5..7)
            .map(|digits| parse_leading_int(digits) as i32)
            .unwrap_or(0)
    }
}

/// Event log for one call; the `events` array is structurally required.
#[derive(Debug, Deserialize)]
pub struct EventLog {
    pub events: Vec<EventEntry>,
}

#[derive(Debug, Deserialize)]
pub struct EventEntry {
    #[serde(default)]
    pub response: Option<EventResponse>,
}

#[derive(Debug, Deserialize)]
pub struct EventResponse {
    #[serde(default)]
    pub response_body: Option<String>,
}
