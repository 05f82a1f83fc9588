//! Loose calendar-date parsing for caller-supplied bounds.

use chrono::{DateTime, NaiveDate};

use crate::errors::MarketDataError;

/// `20100105`; only tried on exactly eight digits, since chrono would also
/// read `2010105` as a date.
const COMPACT_FORMAT: &str = "%Y%m%d";

/// Formats tried in order; the first one that parses the whole input wins.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%B %d %Y",
];

/// Parse a date string into a calendar date.
///
/// Accepts compact (`20100101`), ISO (`2010-01-01`), slashed, US
/// (`01/31/2010`), month-name (`31 Jan 2010`, `January 31, 2010`) and
/// RFC 3339 timestamp forms.
pub fn parse_date(text: &str) -> Result<NaiveDate, MarketDataError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(MarketDataError::DateFormat {
            input: text.to_string(),
        });
    }

    if trimmed.len() == 8 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return NaiveDate::parse_from_str(trimmed, COMPACT_FORMAT).map_err(|_| {
            MarketDataError::DateFormat {
                input: text.to_string(),
            }
        });
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .ok_or_else(|| MarketDataError::DateFormat {
            input: text.to_string(),
        })
}
